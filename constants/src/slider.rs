use bevy::math::Vec2;

/// Horizontal distance between slide centres.
pub const SLIDE_SPACING: f32 = 760.0;

/// Size of a single slide quad.
pub const SLIDE_SIZE: Vec2 = Vec2::new(680.0, 460.0);

pub const SLIDER_TWEEN_SECS: f32 = 0.5;

/// Depth of the slides in front of the backdrop.
pub const SLIDE_DEPTH: f32 = 10.0;
