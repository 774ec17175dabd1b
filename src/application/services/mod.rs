//! Application Services - coordination logic built on ports
//!
//! Services orchestrate domain state and the port interfaces.

pub mod scope_flag;
pub mod window_manager;

pub use scope_flag::{ScopeFlag, ScopeGuard};
pub use window_manager::{WindowError, WindowManager};
