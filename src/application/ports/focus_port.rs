//! FocusPort - interface to the focus-scope manager
//!
//! Windows that participate in input-focus scoping register themselves as
//! the active scope when the platform activates them.

/// Port interface for the focus-scope manager
pub trait FocusPort {
    /// Make this window the active focus scope
    fn make_active_scope(&mut self);
}

/// A null focus-scope manager for testing
pub struct NullFocus;

impl FocusPort for NullFocus {
    fn make_active_scope(&mut self) {}
}
