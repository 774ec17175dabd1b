//! Application Configuration
//!
//! Window defaults loaded from `casement.toml`. Missing file or missing keys
//! fall back to defaults; a malformed file is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Size;

/// Window configuration loaded from casement.toml
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial client width
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial client height
    #[serde(default = "default_height")]
    pub height: u32,

    /// Restore the previous position and size on startup
    #[serde(default = "default_true")]
    pub remember_placement: bool,

    /// Log file path; logging stays off when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            remember_placement: true,
            log_file: None,
        }
    }
}

fn default_title() -> String {
    "Casement".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_true() -> bool {
    true
}

impl WindowConfig {
    /// Find casement.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("casement").join("casement.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("casement.toml"))),
            Some(PathBuf::from("casement.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load from the standard locations, falling back to defaults
    pub fn load_or_default() -> Self {
        Self::find_config_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        toml::from_str(content).map_err(|e| DomainError::ParseError(e.to_string()))
    }

    /// Initial client size the configuration requests
    pub fn initial_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();

        assert_eq!(config.title, "Casement");
        assert_eq!(config.initial_size(), Size::new(800, 600));
        assert!(config.remember_placement);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = WindowConfig::parse("width = 1024\ntitle = \"Demo\"\n").unwrap();

        assert_eq!(config.title, "Demo");
        assert_eq!(config.initial_size(), Size::new(1024, 600));
        assert!(config.remember_placement);
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        assert!(WindowConfig::parse("width = ").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("casement.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "height = 480\nremember_placement = false").unwrap();

        let config = WindowConfig::load(&path).unwrap();

        assert_eq!(config.initial_size(), Size::new(800, 480));
        assert!(!config.remember_placement);
    }
}
