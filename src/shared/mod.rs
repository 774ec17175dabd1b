//! Shared Utilities Module
//!
//! Contains utilities that are shared across layers.

pub mod config;

pub use config::WindowConfig;
