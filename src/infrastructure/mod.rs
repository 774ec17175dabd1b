//! Infrastructure Layer - wiring and concrete services

pub mod composition_root;

pub use composition_root::CompositionRoot;
