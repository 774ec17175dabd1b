//! ScopeFlag - re-entrancy suppression flag with guaranteed release
//!
//! A counted flag whose `enter()` returns a guard; the flag stays set while
//! any guard is alive and clears when the last one drops. Release happens on
//! every exit path, including `?` returns and unwinding, so a failure inside
//! a guarded call cannot leave the flag stuck.

use std::cell::Cell;
use std::rc::Rc;

/// A scoped boolean flag with depth counting
#[derive(Clone, Default)]
pub struct ScopeFlag {
    depth: Rc<Cell<u32>>,
}

impl ScopeFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any scope is currently active
    pub fn is_set(&self) -> bool {
        self.depth.get() > 0
    }

    /// Enter a scope; the flag reads set until the returned guard drops
    pub fn enter(&self) -> ScopeGuard {
        self.depth.set(self.depth.get() + 1);
        ScopeGuard {
            depth: Rc::clone(&self.depth),
        }
    }
}

/// Guard that keeps a [`ScopeFlag`] set for its lifetime
pub struct ScopeGuard {
    depth: Rc<Cell<u32>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_clear_by_default() {
        let flag = ScopeFlag::new();
        assert!(!flag.is_set());
    }

    #[test]
    fn test_flag_set_while_guard_alive() {
        let flag = ScopeFlag::new();

        let guard = flag.enter();
        assert!(flag.is_set());

        drop(guard);
        assert!(!flag.is_set());
    }

    #[test]
    fn test_nested_scopes() {
        let flag = ScopeFlag::new();

        let outer = flag.enter();
        let inner = flag.enter();
        assert!(flag.is_set());

        drop(inner);
        assert!(flag.is_set());

        drop(outer);
        assert!(!flag.is_set());
    }

    #[test]
    fn test_release_on_early_return() {
        fn guarded(flag: &ScopeFlag, fail: bool) -> Result<(), ()> {
            let _scope = flag.enter();
            if fail {
                return Err(());
            }
            Ok(())
        }

        let flag = ScopeFlag::new();
        assert!(guarded(&flag, true).is_err());
        assert!(!flag.is_set());
    }

    #[test]
    fn test_release_on_unwind() {
        let flag = ScopeFlag::new();
        let cloned = flag.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _scope = cloned.enter();
            panic!("guarded call failed");
        }));

        assert!(result.is_err());
        assert!(!flag.is_set());
    }
}
