//! RenderPort - notification sink for the renderer
//!
//! The renderer only needs to know when the client area changes size so it
//! can rebuild its swap targets; failures are the renderer's own concern.

use crate::domain::value_objects::Size;

/// Port interface for the renderer
pub trait RenderPort {
    /// Notify the renderer of a new client-area size
    fn resized(&mut self, size: Size);
}

/// A null renderer for testing
pub struct NullRenderer;

impl RenderPort for NullRenderer {
    fn resized(&mut self, _size: Size) {}
}
