//! Domain Layer - Core business objects and rules
//!
//! Contains entities, value objects, repository interfaces, and domain
//! errors. Depends on nothing outside this crate.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::WindowState;
pub use errors::DomainError;
