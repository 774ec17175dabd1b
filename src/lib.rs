//! Casement - top-level window lifecycle core
//!
//! Models the state machine of a top-level window sitting above a native
//! platform surface: activation, visibility, position, and client size,
//! kept consistent across programmatic calls and asynchronous platform
//! notifications without re-entrant feedback loops.
//!
//! The platform surface, layout engine, renderer, and focus-scope manager
//! are injected through ports; this crate owns only the window-level state
//! and its synchronization rules.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::ports::{
    FocusPort, LayoutError, LayoutPort, NullFocus, NullLayout, NullRenderer, NullSurface,
    RenderPort, SurfaceError, SurfaceEvent, SurfacePort,
};
pub use application::services::{ScopeFlag, WindowError, WindowManager};
pub use domain::entities::WindowState;
pub use domain::repositories::{Placement, PlacementRepository};
pub use domain::value_objects::{Point, ResizeEdge, Size};
pub use infrastructure::CompositionRoot;
pub use shared::config::WindowConfig;
