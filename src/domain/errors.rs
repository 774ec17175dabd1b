//! Domain layer error types
//!
//! All errors that can occur in domain layer operations.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Invalid entity state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration error
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Persistence error
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
