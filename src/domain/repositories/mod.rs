//! Domain Repositories - persistence interfaces
//!
//! Repositories abstract how domain data is stored; adapters provide
//! concrete implementations.

pub mod placement_repository;

pub use placement_repository::{NullPlacementRepository, Placement, PlacementRepository};
