//! WindowManager - keeps top-level window state in sync with the platform
//!
//! Owns activation, visibility, position, and client size for one window and
//! reconciles programmatic calls (`show`, `hide`, `arrange`) with
//! platform-originated notifications without feedback loops:
//!
//! - a visibility-suppression scope stops `show`/`hide` from re-triggering
//!   the visibility-change reaction they themselves cause, and
//! - an auto-sizing scope marks arrange-initiated resizes so the platform's
//!   echo does not overwrite the user-facing width/height layout inputs.
//!
//! Everything runs on the thread that owns the manager; the embedder drains
//! surface events into [`WindowManager::handle_event`] on that thread.

use thiserror::Error;

use crate::application::ports::{
    FocusPort, LayoutError, LayoutPort, RenderPort, SurfaceError, SurfaceEvent, SurfacePort,
};
use crate::application::services::scope_flag::ScopeFlag;
use crate::domain::entities::WindowState;
use crate::domain::repositories::Placement;
use crate::domain::value_objects::{Point, ResizeEdge, Size};

/// Error from a window operation; always a relayed collaborator failure
#[derive(Error, Debug)]
pub enum WindowError {
    /// Platform surface call failed
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Layout pass failed
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

type StateHandler = Box<dyn FnMut(&WindowState)>;
type PositionHandler = Box<dyn FnMut(Point)>;

/// Manages one top-level window above a platform surface
pub struct WindowManager<S>
where
    S: SurfacePort,
{
    surface: Option<S>,
    layout: Box<dyn LayoutPort>,
    renderer: Box<dyn RenderPort>,
    focus: Option<Box<dyn FocusPort>>,
    state: WindowState,
    auto_sizing: ScopeFlag,
    suppress_visibility: ScopeFlag,
    initialized: bool,
    init_depth: u32,
    pending_placement: Option<Placement>,
    activated_handlers: Vec<StateHandler>,
    deactivated_handlers: Vec<StateHandler>,
    position_changed_handlers: Vec<PositionHandler>,
    closed_handlers: Vec<StateHandler>,
}

impl<S> WindowManager<S>
where
    S: SurfacePort,
{
    /// Create a new window manager over the given collaborators
    pub fn new(layout: Box<dyn LayoutPort>, renderer: Box<dyn RenderPort>) -> Self {
        Self {
            surface: None,
            layout,
            renderer,
            focus: None,
            state: WindowState::default(),
            auto_sizing: ScopeFlag::new(),
            suppress_visibility: ScopeFlag::new(),
            initialized: false,
            init_depth: 0,
            pending_placement: None,
            activated_handlers: Vec::new(),
            deactivated_handlers: Vec::new(),
            position_changed_handlers: Vec::new(),
            closed_handlers: Vec::new(),
        }
    }

    /// Attach the platform surface backing this window
    pub fn with_surface(mut self, surface: S) -> Self {
        self.state.client_size = surface.client_size();
        self.surface = Some(surface);
        self
    }

    /// Participate in input-focus scoping
    pub fn with_focus(mut self, focus: Box<dyn FocusPort>) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Configure the initial layout inputs
    pub fn with_requested_size(mut self, size: Size) -> Self {
        self.state.set_layout_inputs(size);
        self
    }

    /// Placement to apply during one-time initialization
    pub fn with_pending_placement(mut self, placement: Placement) -> Self {
        self.pending_placement = Some(placement);
        self
    }

    // --- observable surface -------------------------------------------------

    /// Current window state
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    /// Whether the platform reports this window as active
    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Whether the window is visible
    pub fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    /// Client size as last reported by the platform
    pub fn client_size(&self) -> Size {
        self.state.client_size
    }

    /// Window position; read through to the surface when one is attached
    pub fn position(&self) -> Point {
        match self.surface.as_ref() {
            Some(surface) => surface.position(),
            None => self.state.position,
        }
    }

    /// Move the window
    pub fn set_position(&mut self, position: Point) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_position(position);
        }
        self.state.position = position;
    }

    /// Register a handler for platform activation; fires before `is_active`
    /// flips, so a handler still observes the pre-activation state
    pub fn on_activated(&mut self, handler: impl FnMut(&WindowState) + 'static) {
        self.activated_handlers.push(Box::new(handler));
    }

    /// Register a handler for platform deactivation; fires after `is_active`
    /// clears, so a handler observes the authoritative inactive state
    pub fn on_deactivated(&mut self, handler: impl FnMut(&WindowState) + 'static) {
        self.deactivated_handlers.push(Box::new(handler));
    }

    /// Register a handler for platform-reported moves
    pub fn on_position_changed(&mut self, handler: impl FnMut(Point) + 'static) {
        self.position_changed_handlers.push(Box::new(handler));
    }

    /// Register a handler for window close
    pub fn on_closed(&mut self, handler: impl FnMut(&WindowState) + 'static) {
        self.closed_handlers.push(Box::new(handler));
    }

    // --- lifecycle operations -----------------------------------------------

    /// Request platform focus; state changes only once the platform confirms
    pub fn activate(&mut self) -> Result<(), WindowError> {
        if let Some(surface) = self.surface.as_mut() {
            surface.activate()?;
        }
        Ok(())
    }

    /// Show the window: run one-time initialization if needed, flip
    /// visibility, run the initial layout pass, then show the surface.
    ///
    /// Deliberately not short-circuited when already visible; every call
    /// repeats the layout pass and the platform show.
    pub fn show(&mut self) -> Result<(), WindowError> {
        let _suppress = self.suppress_visibility.enter();
        self.ensure_initialized()?;
        self.write_visible(true)?;
        self.layout.execute_initial_pass()?;
        if let Some(surface) = self.surface.as_mut() {
            surface.show()?;
        }
        Ok(())
    }

    /// Hide the window: hide the surface, then flip visibility
    pub fn hide(&mut self) -> Result<(), WindowError> {
        let _suppress = self.suppress_visibility.enter();
        if let Some(surface) = self.surface.as_mut() {
            surface.hide()?;
        }
        self.write_visible(false)?;
        Ok(())
    }

    /// Set the visibility property. Outside a show/hide call this routes to
    /// [`WindowManager::show`] or [`WindowManager::hide`], so a declarative
    /// "set visible" drives the same path as the direct calls.
    pub fn set_visible(&mut self, visible: bool) -> Result<(), WindowError> {
        self.write_visible(visible)
    }

    /// Visibility-change reaction. Show/hide hold the suppression scope
    /// around their own write, which is what breaks the recursion.
    fn write_visible(&mut self, visible: bool) -> Result<(), WindowError> {
        self.state.is_visible = visible;
        if self.suppress_visibility.is_set() {
            return Ok(());
        }
        if visible {
            self.show()
        } else {
            self.hide()
        }
    }

    /// Whether one-time initialization has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Open an initialization batch; batches may nest
    pub fn begin_init(&mut self) {
        self.init_depth += 1;
    }

    /// Close an initialization batch. When the outermost batch closes for
    /// the first time, the pending placement is applied to the surface.
    pub fn end_init(&mut self) -> Result<(), WindowError> {
        self.init_depth = self.init_depth.saturating_sub(1);
        if self.init_depth > 0 || self.initialized {
            return Ok(());
        }
        if let Some(placement) = self.pending_placement.take() {
            self.state.set_layout_inputs(placement.size);
            self.state.position = placement.position;
            if let Some(surface) = self.surface.as_mut() {
                surface.set_position(placement.position);
                surface.resize(placement.size)?;
            }
            crate::log!("window init: restored placement {:?}", placement);
        }
        self.initialized = true;
        Ok(())
    }

    fn ensure_initialized(&mut self) -> Result<(), WindowError> {
        if !self.initialized {
            self.begin_init();
            self.end_init()?;
        }
        Ok(())
    }

    /// Start an interactive move drag; no-op without a surface
    pub fn begin_move_drag(&mut self) -> Result<(), WindowError> {
        if let Some(surface) = self.surface.as_mut() {
            surface.begin_move_drag()?;
        }
        Ok(())
    }

    /// Start an interactive resize drag; no-op without a surface
    pub fn begin_resize_drag(&mut self, edge: ResizeEdge) -> Result<(), WindowError> {
        if let Some(surface) = self.surface.as_mut() {
            surface.begin_resize_drag(edge)?;
        }
        Ok(())
    }

    /// Commit an arrange-computed size to the platform and return the
    /// platform's authoritative client size, which may differ from the
    /// requested one.
    ///
    /// The auto-sizing scope covers the outbound resize and any surface
    /// events it reports synchronously, so the echoed resize notification
    /// does not overwrite the width/height layout inputs.
    pub fn arrange(&mut self, size: Size) -> Result<Size, WindowError> {
        let scope = self.auto_sizing.enter();
        let reported = match self.surface.as_mut() {
            Some(surface) => {
                surface.resize(size)?;
                surface.drain_events()
            }
            None => Vec::new(),
        };
        for event in reported {
            self.handle_event(event)?;
        }
        drop(scope);

        let committed = match self.surface.as_ref() {
            Some(surface) => surface.client_size(),
            None => size,
        };
        self.state.set_client_size(committed);
        Ok(committed)
    }

    // --- platform notifications ---------------------------------------------

    /// Dispatch one platform notification
    pub fn handle_event(&mut self, event: SurfaceEvent) -> Result<(), WindowError> {
        match event {
            SurfaceEvent::Activated => self.handle_activated(),
            SurfaceEvent::Deactivated => self.handle_deactivated(),
            SurfaceEvent::Moved(position) => self.handle_moved(position),
            SurfaceEvent::Resized(size) => self.handle_resized(size)?,
            SurfaceEvent::Closed => self.handle_closed(),
        }
        Ok(())
    }

    /// Drain and dispatch all pending surface notifications
    pub fn pump_events(&mut self) -> Result<(), WindowError> {
        let events = match self.surface.as_mut() {
            Some(surface) => surface.drain_events(),
            None => return Ok(()),
        };
        for event in events {
            self.handle_event(event)?;
        }
        Ok(())
    }

    /// Observers fire first, then the focus scope registers, then the
    /// active flag commits; the order matches the platform event's logical
    /// sequence.
    fn handle_activated(&mut self) {
        for handler in &mut self.activated_handlers {
            handler(&self.state);
        }
        if let Some(focus) = self.focus.as_mut() {
            focus.make_active_scope();
        }
        self.state.is_active = true;
    }

    /// Reverse of activation: the flag clears before observers fire
    fn handle_deactivated(&mut self) {
        self.state.is_active = false;
        for handler in &mut self.deactivated_handlers {
            handler(&self.state);
        }
    }

    fn handle_moved(&mut self, position: Point) {
        self.state.position = position;
        for handler in &mut self.position_changed_handlers {
            handler(position);
        }
    }

    /// A platform-originated resize overwrites the layout inputs; an
    /// arrange-originated one (auto-sizing scope set) must not. The cached
    /// client size, the full layout pass, and the renderer notification are
    /// unconditional either way.
    fn handle_resized(&mut self, size: Size) -> Result<(), WindowError> {
        if !self.auto_sizing.is_set() {
            self.state.set_layout_inputs(size);
        }
        self.state.set_client_size(size);
        self.layout.execute_layout_pass()?;
        self.renderer.resized(size);
        Ok(())
    }

    /// Window was closed: force not-visible without re-entering the hide
    /// path, release the surface handle, and notify close observers.
    pub fn handle_closed(&mut self) {
        let _suppress = self.suppress_visibility.enter();
        self.state.is_visible = false;
        self.state.is_active = false;
        self.surface = None;
        crate::log!("window closed");
        for handler in &mut self.closed_handlers {
            handler(&self.state);
        }
    }
}
