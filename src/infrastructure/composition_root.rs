//! CompositionRoot - Dependency Injection Container
//!
//! Wires configuration, placement persistence, and the window manager over
//! an embedder-supplied platform surface, layout engine, and renderer.

use crate::adapters::gateways::FilePlacementGateway;
use crate::application::ports::{LayoutPort, RenderPort, SurfacePort};
use crate::application::services::WindowManager;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{Placement, PlacementRepository};
use crate::shared::config::WindowConfig;

/// Application composition root - owns the window and its persistence
pub struct CompositionRoot<S>
where
    S: SurfacePort,
{
    /// The composed window manager
    pub window: WindowManager<S>,

    /// Where placement is persisted between runs
    pub placement_store: FilePlacementGateway,

    /// Effective configuration
    pub config: WindowConfig,
}

impl<S> CompositionRoot<S>
where
    S: SurfacePort,
{
    /// Compose with configuration from the standard locations
    pub fn new(surface: S, layout: Box<dyn LayoutPort>, renderer: Box<dyn RenderPort>) -> Self {
        Self::with_config(
            surface,
            layout,
            renderer,
            WindowConfig::load_or_default(),
            FilePlacementGateway::in_config_dir(),
        )
    }

    /// Compose with explicit configuration and placement store
    pub fn with_config(
        surface: S,
        layout: Box<dyn LayoutPort>,
        renderer: Box<dyn RenderPort>,
        config: WindowConfig,
        mut placement_store: FilePlacementGateway,
    ) -> Self {
        if let Some(path) = &config.log_file {
            crate::log::init(path);
        }

        let restored = if config.remember_placement {
            placement_store.load().unwrap_or_default()
        } else {
            None
        };

        let mut window = WindowManager::new(layout, renderer)
            .with_surface(surface)
            .with_requested_size(config.initial_size());
        if let Some(placement) = restored {
            window = window.with_pending_placement(placement);
        }

        Self {
            window,
            placement_store,
            config,
        }
    }

    /// Persist the current placement; call this on the embedder's close path
    pub fn persist_placement(&mut self) -> Result<(), DomainError> {
        if !self.config.remember_placement {
            return Ok(());
        }
        let placement = Placement::new(self.window.position(), self.window.client_size());
        self.placement_store.store(&placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NullLayout, NullRenderer, NullSurface};
    use crate::domain::value_objects::{Point, Size};

    fn store_in(dir: &tempfile::TempDir) -> FilePlacementGateway {
        FilePlacementGateway::new(dir.path().join("placement.json"))
    }

    #[test]
    fn test_restored_placement_applies_on_show() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store
            .store(&Placement::new(Point::new(30, 40), Size::new(500, 400)))
            .unwrap();

        let mut root = CompositionRoot::with_config(
            NullSurface::new(),
            Box::new(NullLayout),
            Box::new(NullRenderer),
            WindowConfig::default(),
            store,
        );

        root.window.show().unwrap();

        assert_eq!(root.window.position(), Point::new(30, 40));
        assert_eq!(root.window.state().requested_size(), Size::new(500, 400));
    }

    #[test]
    fn test_persist_placement_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        let mut root = CompositionRoot::with_config(
            NullSurface::new(),
            Box::new(NullLayout),
            Box::new(NullRenderer),
            WindowConfig::default(),
            store_in(&dir),
        );
        root.window.show().unwrap();
        root.window.set_position(Point::new(5, 6));
        root.persist_placement().unwrap();

        let mut reloaded = store_in(&dir);
        let placement = reloaded.load().unwrap().unwrap();
        assert_eq!(placement.position, Point::new(5, 6));
    }

    #[test]
    fn test_remember_placement_off_skips_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let config = WindowConfig {
            remember_placement: false,
            ..Default::default()
        };

        let mut root = CompositionRoot::with_config(
            NullSurface::new(),
            Box::new(NullLayout),
            Box::new(NullRenderer),
            config,
            store_in(&dir),
        );
        root.persist_placement().unwrap();

        assert!(!dir.path().join("placement.json").exists());
    }
}
