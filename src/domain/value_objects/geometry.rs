//! Geometry value objects - window positions, sizes, and resize edges
//!
//! These are the units the window core and the platform surface exchange.

use serde::{Deserialize, Serialize};

/// A position on screen, in platform pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A client-area size, in platform pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check whether either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamp both dimensions to a minimum size
    pub fn max(&self, min: Size) -> Size {
        Size::new(self.width.max(min.width), self.height.max(min.height))
    }
}

/// Edge or corner grabbed when starting an interactive resize drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0, 100).is_empty());
        assert!(Size::new(100, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn test_size_clamps_to_minimum() {
        let clamped = Size::new(50, 900).max(Size::new(200, 200));
        assert_eq!(clamped, Size::new(200, 900));
    }
}
