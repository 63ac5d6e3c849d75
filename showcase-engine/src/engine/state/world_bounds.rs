use bevy::prelude::*;
use constants::world::{OVERVIEW_TOP_MARGIN, WORLD_HEIGHT, WORLD_WIDTH};

use super::LayoutMode;

/// Edges of the region the camera target may rest in (y-up world units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl WorldBounds {
    /// Bounds for the given layout mode.
    ///
    /// Grid mode is a fixed rectangle centred on the origin. Overview mode has
    /// no horizontal room at all and scrolls vertically from a small margin
    /// above the first row down to the measured content height.
    pub fn for_layout(mode: LayoutMode, overview_height: f32) -> Self {
        match mode {
            LayoutMode::Grid => Self {
                top: WORLD_HEIGHT * 0.5,
                right: WORLD_WIDTH * 0.5,
                bottom: -WORLD_HEIGHT * 0.5,
                left: -WORLD_WIDTH * 0.5,
            },
            LayoutMode::Overview => Self {
                top: OVERVIEW_TOP_MARGIN,
                right: 0.0,
                bottom: -overview_height.max(0.0),
                left: 0.0,
            },
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.bottom
            && point.y <= self.top
    }

    pub fn is_ordered(&self) -> bool {
        self.left <= self.right && self.bottom <= self.top
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::for_layout(LayoutMode::Grid, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_bounds_are_symmetric_around_origin() {
        let bounds = WorldBounds::for_layout(LayoutMode::Grid, 1234.0);
        assert_eq!(bounds.left, -bounds.right);
        assert_eq!(bounds.bottom, -bounds.top);
        assert_eq!(bounds.right, WORLD_WIDTH * 0.5);
        assert_eq!(bounds.top, WORLD_HEIGHT * 0.5);
    }

    #[test]
    fn overview_collapses_horizontal_room() {
        let bounds = WorldBounds::for_layout(LayoutMode::Overview, 2500.0);
        assert_eq!(bounds.left, 0.0);
        assert_eq!(bounds.right, 0.0);
        assert_eq!(bounds.top, OVERVIEW_TOP_MARGIN);
        assert_eq!(bounds.bottom, -2500.0);
        assert!(bounds.contains(Vec2::new(0.0, -1200.0)));
        assert!(!bounds.contains(Vec2::new(1.0, -1200.0)));
    }

    #[test]
    fn negative_overview_height_is_treated_as_empty() {
        let bounds = WorldBounds::for_layout(LayoutMode::Overview, -10.0);
        assert_eq!(bounds.bottom, 0.0);
        assert!(bounds.is_ordered());
    }
}
