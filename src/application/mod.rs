//! Application Layer - Use Cases and Business Workflows
//!
//! This layer orchestrates domain entities and defines application-specific
//! workflows. It contains:
//! - **Ports**: Interfaces for external collaborators (platform surface,
//!   layout engine, renderer, focus-scope manager)
//! - **Services**: The window state machine and its re-entrancy guards
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that infrastructure and embedders implement
//! - Contains no platform-specific code

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
