//! Adapters Layer - implementations of domain interfaces

pub mod gateways;

pub use gateways::*;
