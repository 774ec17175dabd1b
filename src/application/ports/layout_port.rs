//! LayoutPort - interface to the layout engine
//!
//! The window core triggers two kinds of passes: an initial pass scoped to
//! the window being shown, and a full pass over the whole pending layout
//! queue after a platform resize.

use thiserror::Error;

/// Layout engine error
#[derive(Error, Debug)]
#[error("Layout error: {0}")]
pub struct LayoutError(pub String);

/// Port interface for the layout engine
pub trait LayoutPort {
    /// Run the initial measure/arrange pass for this window only
    fn execute_initial_pass(&mut self) -> Result<(), LayoutError>;

    /// Run the full pending layout queue
    fn execute_layout_pass(&mut self) -> Result<(), LayoutError>;
}

/// A null layout engine for testing
pub struct NullLayout;

impl LayoutPort for NullLayout {
    fn execute_initial_pass(&mut self) -> Result<(), LayoutError> {
        Ok(())
    }

    fn execute_layout_pass(&mut self) -> Result<(), LayoutError> {
        Ok(())
    }
}
