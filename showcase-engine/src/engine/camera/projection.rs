use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

/// Orthographic frustum extents for a viewport, centred on the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportProjection {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub aspect: f32,
}

impl ViewportProjection {
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: -width * 0.5,
            right: width * 0.5,
            top: height * 0.5,
            bottom: -height * 0.5,
            aspect: if height > 0.0 { width / height } else { 1.0 },
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Orthographic projection covering this viewport, with `zoom` > 1 magnifying.
    pub fn orthographic(&self, zoom: f32) -> OrthographicProjection {
        OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: self.width(),
                height: self.height(),
            },
            scale: 1.0 / zoom.max(f32::EPSILON),
            ..OrthographicProjection::default_3d()
        }
    }
}

/// Convert a window position (origin top-left, y down) to world space.
pub fn screen_to_world(cursor: Vec2, viewport: Vec2, camera_position: Vec2, zoom: f32) -> Vec2 {
    let centred = Vec2::new(cursor.x - viewport.x * 0.5, viewport.y * 0.5 - cursor.y);
    camera_position + centred / zoom.max(f32::EPSILON)
}
