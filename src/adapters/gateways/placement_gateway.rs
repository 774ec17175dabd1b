//! FilePlacementGateway - File-based window placement repository
//!
//! Stores the last window position and size as JSON so the next run can
//! reopen the window where the user left it.

use std::fs;
use std::path::PathBuf;

use crate::domain::errors::DomainError;
use crate::domain::repositories::{Placement, PlacementRepository};

/// File-based placement repository
pub struct FilePlacementGateway {
    path: PathBuf,
}

impl FilePlacementGateway {
    /// Create a gateway storing placement at the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Gateway in the user config directory, falling back to cwd
    pub fn in_config_dir() -> Self {
        let path = dirs::config_dir()
            .map(|p| p.join("casement"))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("placement.json");
        Self::new(path)
    }

    /// Get the placement file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PlacementRepository for FilePlacementGateway {
    fn load(&mut self) -> Result<Option<Placement>, DomainError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let placement = serde_json::from_str(&content)
            .map_err(|e| DomainError::ParseError(e.to_string()))?;
        Ok(Some(placement))
    }

    fn store(&mut self, placement: &Placement) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(placement)
            .map_err(|e| DomainError::PersistenceError(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DomainError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
