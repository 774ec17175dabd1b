//! Simple file-based logging for debugging
//!
//! Disabled until [`init`] is called; every `log!` before that is a no-op,
//! which keeps library consumers and tests quiet by default.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Initialize logging to the given file, truncating any previous log
pub fn init(path: &Path) {
    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(file);
        }
    }

    log("=== Casement Log Started ===");
}

/// Log a message to the file
pub fn log(msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let ts = chrono::Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", ts, msg);
            let _ = file.flush();
        }
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_without_init_is_noop() {
        // Must not panic or create files when logging is uninitialized
        crate::log!("dropped message {}", 42);
    }
}
