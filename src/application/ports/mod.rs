//! Application Ports - interfaces for external collaborators
//!
//! Ports define the capabilities the window core consumes; adapters and
//! embedders provide the implementations.

pub mod focus_port;
pub mod layout_port;
pub mod render_port;
pub mod surface_port;

pub use focus_port::{FocusPort, NullFocus};
pub use layout_port::{LayoutError, LayoutPort, NullLayout};
pub use render_port::{NullRenderer, RenderPort};
pub use surface_port::{NullSurface, SurfaceError, SurfaceEvent, SurfacePort};
