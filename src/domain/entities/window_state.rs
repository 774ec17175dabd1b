//! WindowState entity - observable state of a top-level window
//!
//! Tracks activation, visibility, position, the platform-reported client
//! size, and the user-facing width/height layout inputs.

use crate::domain::value_objects::{Point, Size};

/// Complete state of a top-level window
#[derive(Clone, Debug, PartialEq)]
pub struct WindowState {
    /// Whether the platform has reported this window as the active one
    pub is_active: bool,
    /// Whether the window is (programmatically or externally) visible
    pub is_visible: bool,
    /// Last known position; authoritative position lives on the surface
    pub position: Point,
    /// Client size as last reported by the platform surface
    pub client_size: Size,
    /// User-facing width layout input
    pub width: u32,
    /// User-facing height layout input
    pub height: u32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            is_active: false,
            is_visible: false,
            position: Point::default(),
            client_size: Size::new(800, 600),
            width: 800,
            height: 600,
        }
    }
}

impl WindowState {
    /// Create a new window state with given layout inputs
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            client_size: Size::new(width, height),
            width,
            height,
            ..Default::default()
        }
    }

    /// Size the layout inputs currently request
    pub fn requested_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Record a platform-reported client size
    pub fn set_client_size(&mut self, size: Size) {
        self.client_size = size;
    }

    /// Overwrite the layout inputs with a platform-reported size
    pub fn set_layout_inputs(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_state_default() {
        let state = WindowState::default();

        assert!(!state.is_active);
        assert!(!state.is_visible);
        assert_eq!(state.client_size, Size::new(800, 600));
    }

    #[test]
    fn test_layout_inputs_track_requested_size() {
        let mut state = WindowState::new(640, 480);
        assert_eq!(state.requested_size(), Size::new(640, 480));

        state.set_layout_inputs(Size::new(400, 300));
        assert_eq!(state.requested_size(), Size::new(400, 300));
    }

    #[test]
    fn test_client_size_independent_of_layout_inputs() {
        let mut state = WindowState::new(640, 480);

        state.set_client_size(Size::new(1024, 768));
        assert_eq!(state.client_size, Size::new(1024, 768));
        assert_eq!(state.requested_size(), Size::new(640, 480));
    }
}
