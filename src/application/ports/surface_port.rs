//! SurfacePort - interface to the native platform window surface
//!
//! The window core drives the surface through this port and learns about
//! platform-originated changes by draining its event queue. The embedder is
//! responsible for delivering platform-thread notifications on the thread
//! that owns the window core; nothing here synchronizes.

use thiserror::Error;

use crate::domain::value_objects::{Point, ResizeEdge, Size};

/// Platform surface operation error
#[derive(Error, Debug)]
pub enum SurfaceError {
    /// The native handle is gone (window destroyed out from under us)
    #[error("Surface lost")]
    SurfaceLost,

    /// Any other platform failure
    #[error("Platform error: {0}")]
    PlatformError(String),
}

/// Notification reported by the platform surface, tagged by kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Window became the active window
    Activated,
    /// Window stopped being the active window
    Deactivated,
    /// Window moved to a new position
    Moved(Point),
    /// Client area was resized
    Resized(Size),
    /// Window was closed by the platform
    Closed,
}

/// Port interface for the native platform surface
pub trait SurfacePort {
    /// Current position on screen
    fn position(&self) -> Point;

    /// Move the window
    fn set_position(&mut self, position: Point);

    /// Current client-area size as the platform reports it
    fn client_size(&self) -> Size;

    /// Request a client-area resize; the platform may clamp or adjust
    fn resize(&mut self, size: Size) -> Result<(), SurfaceError>;

    /// Make the surface visible
    fn show(&mut self) -> Result<(), SurfaceError>;

    /// Hide the surface
    fn hide(&mut self) -> Result<(), SurfaceError>;

    /// Request input focus/activation from the platform
    fn activate(&mut self) -> Result<(), SurfaceError>;

    /// Start an interactive move drag
    fn begin_move_drag(&mut self) -> Result<(), SurfaceError>;

    /// Start an interactive resize drag from the given edge
    fn begin_resize_drag(&mut self, edge: ResizeEdge) -> Result<(), SurfaceError>;

    /// Take all pending surface notifications, oldest first
    fn drain_events(&mut self) -> Vec<SurfaceEvent>;
}

/// A null surface for testing and headless embedding
pub struct NullSurface {
    position: Point,
    client_size: Size,
    visible: bool,
}

impl NullSurface {
    pub fn new() -> Self {
        Self {
            position: Point::default(),
            client_size: Size::new(800, 600),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for NullSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfacePort for NullSurface {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn client_size(&self) -> Size {
        self.client_size
    }

    fn resize(&mut self, size: Size) -> Result<(), SurfaceError> {
        self.client_size = size;
        Ok(())
    }

    fn show(&mut self) -> Result<(), SurfaceError> {
        self.visible = true;
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SurfaceError> {
        self.visible = false;
        Ok(())
    }

    fn activate(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn begin_move_drag(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn begin_resize_drag(&mut self, _edge: ResizeEdge) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        Vec::new()
    }
}
