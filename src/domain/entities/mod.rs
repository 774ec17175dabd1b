//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.

pub mod window_state;

pub use window_state::WindowState;
