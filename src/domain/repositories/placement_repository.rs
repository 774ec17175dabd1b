//! PlacementRepository - interface for persisting window placement
//!
//! This trait defines how the last window position and size are stored so
//! an embedder can restore them on the next run.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Point, Size};

/// Persisted window placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Window position on screen
    pub position: Point,
    /// Client-area size
    pub size: Size,
}

impl Placement {
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }
}

/// Repository interface for window placement
pub trait PlacementRepository {
    /// Load the persisted placement, if any
    fn load(&mut self) -> Result<Option<Placement>, DomainError>;

    /// Store a placement
    fn store(&mut self, placement: &Placement) -> Result<(), DomainError>;

    /// Discard the persisted placement
    fn clear(&mut self) -> Result<(), DomainError>;
}

/// A null implementation for testing
pub struct NullPlacementRepository;

impl PlacementRepository for NullPlacementRepository {
    fn load(&mut self) -> Result<Option<Placement>, DomainError> {
        Ok(None)
    }

    fn store(&mut self, _placement: &Placement) -> Result<(), DomainError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DomainError> {
        Ok(())
    }
}
