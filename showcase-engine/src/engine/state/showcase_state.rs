use bevy::prelude::*;
use constants::layout::MOBILE_BREAKPOINT;

use super::{LayoutMode, WorldBounds};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StateError {
    #[error("{field} must be finite, got {value:?}")]
    NonFinite { field: &'static str, value: Vec2 },

    #[error("overview height must be a finite non-negative number, got {0}")]
    InvalidOverviewHeight(f32),

    #[error("viewport must have a positive size, got {0:?}")]
    InvalidViewport(Vec2),

    #[error("world bounds are inverted: {0:?}")]
    InvertedBounds(WorldBounds),

    #[error("layout mode cannot change while a transition is in progress")]
    TransitionInProgress,
}

/// Scalars every frame reads: pointer, camera, bounds, layout and flags.
#[derive(Resource, Debug, Clone)]
pub struct ShowcaseState {
    mouse: Vec2,
    camera: Vec2,
    bounds: WorldBounds,
    layout_mode: LayoutMode,
    transitioning: bool,
    overview_height: f32,
    viewport: Vec2,
    info_open: bool,
    opened_project: Option<String>,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            mouse: Vec2::ZERO,
            camera: Vec2::ZERO,
            bounds: WorldBounds::default(),
            layout_mode: LayoutMode::Grid,
            transitioning: false,
            overview_height: 0.0,
            viewport: Vec2::new(1280.0, 720.0),
            info_open: false,
            opened_project: None,
        }
    }
}

fn finite(field: &'static str, value: Vec2) -> Result<Vec2, StateError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StateError::NonFinite { field, value })
    }
}

impl ShowcaseState {
    pub fn mouse(&self) -> Vec2 {
        self.mouse
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn world_bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn overview_height(&self) -> f32 {
        self.overview_height
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.x < MOBILE_BREAKPOINT
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn opened_project(&self) -> Option<&str> {
        self.opened_project.as_deref()
    }

    pub fn is_project_open(&self) -> bool {
        self.opened_project.is_some()
    }

    /// Pointer position in window coordinates (origin top-left, y down).
    pub fn set_mouse(&mut self, position: Vec2) -> Result<(), StateError> {
        self.mouse = finite("mouse", position)?;
        Ok(())
    }

    pub fn set_camera_position(&mut self, position: Vec2) -> Result<(), StateError> {
        self.camera = finite("camera", position)?;
        Ok(())
    }

    pub fn set_world_bounds(&mut self, bounds: WorldBounds) -> Result<(), StateError> {
        if !bounds.is_ordered() {
            return Err(StateError::InvertedBounds(bounds));
        }
        self.bounds = bounds;
        Ok(())
    }

    /// Switch layout mode. Rejected while a previous switch is still animating.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) -> Result<(), StateError> {
        if self.transitioning && mode != self.layout_mode {
            return Err(StateError::TransitionInProgress);
        }
        self.layout_mode = mode;
        Ok(())
    }

    pub fn set_transitioning(&mut self, transitioning: bool) {
        self.transitioning = transitioning;
    }

    pub fn set_overview_height(&mut self, height: f32) -> Result<(), StateError> {
        if !height.is_finite() || height < 0.0 {
            return Err(StateError::InvalidOverviewHeight(height));
        }
        self.overview_height = height;
        Ok(())
    }

    pub fn set_viewport(&mut self, size: Vec2) -> Result<(), StateError> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(StateError::InvalidViewport(size));
        }
        self.viewport = size;
        Ok(())
    }

    pub fn set_info_open(&mut self, open: bool) {
        self.info_open = open;
    }

    pub fn set_opened_project(&mut self, model: Option<String>) {
        self.opened_project = model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_positions() {
        let mut state = ShowcaseState::default();
        let err = state
            .set_camera_position(Vec2::new(f32::NAN, 0.0))
            .unwrap_err();
        assert!(matches!(err, StateError::NonFinite { field: "camera", .. }));
        assert_eq!(state.camera(), Vec2::ZERO);

        assert!(state.set_mouse(Vec2::new(0.0, f32::INFINITY)).is_err());
        assert!(state.set_mouse(Vec2::new(12.0, 40.0)).is_ok());
        assert_eq!(state.mouse(), Vec2::new(12.0, 40.0));
    }

    #[test]
    fn layout_change_is_blocked_during_transition() {
        let mut state = ShowcaseState::default();
        state.set_transitioning(true);
        assert_eq!(
            state.set_layout_mode(LayoutMode::Overview),
            Err(StateError::TransitionInProgress)
        );
        assert_eq!(state.layout_mode(), LayoutMode::Grid);

        state.set_transitioning(false);
        state.set_layout_mode(LayoutMode::Overview).unwrap();
        assert_eq!(state.layout_mode(), LayoutMode::Overview);
    }

    #[test]
    fn validates_overview_height_and_viewport() {
        let mut state = ShowcaseState::default();
        assert!(state.set_overview_height(-1.0).is_err());
        assert!(state.set_overview_height(f32::NAN).is_err());
        state.set_overview_height(1800.0).unwrap();
        assert_eq!(state.overview_height(), 1800.0);

        assert!(state.set_viewport(Vec2::new(0.0, 600.0)).is_err());
        state.set_viewport(Vec2::new(390.0, 844.0)).unwrap();
        assert!(state.is_mobile());
        state.set_viewport(Vec2::new(1440.0, 900.0)).unwrap();
        assert!(!state.is_mobile());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let mut state = ShowcaseState::default();
        let inverted = WorldBounds {
            top: -10.0,
            right: 5.0,
            bottom: 10.0,
            left: -5.0,
        };
        assert_eq!(
            state.set_world_bounds(inverted),
            Err(StateError::InvertedBounds(inverted))
        );
    }

    #[test]
    fn tracks_opened_project() {
        let mut state = ShowcaseState::default();
        assert!(!state.is_project_open());
        state.set_opened_project(Some("aurora-lamp".into()));
        assert_eq!(state.opened_project(), Some("aurora-lamp"));
        state.set_opened_project(None);
        assert!(!state.is_project_open());
    }
}
