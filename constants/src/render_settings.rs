/// Render loop delta time never exceeds this many seconds.
pub const MAX_FRAME_DELTA: f32 = 1.0;

/// Ping-pong blur iterations while the info overlay is open.
pub const BLUR_ITERATIONS_DESKTOP: u32 = 8;
pub const BLUR_ITERATIONS_MOBILE: u32 = 4;

/// Blur tap distance in texels.
pub const BLUR_RADIUS: f32 = 1.5;

pub const PHOTO_LAYER: usize = 0;
pub const CURSOR_LAYER: usize = 1;
pub const PROJECT_LAYER: usize = 2;

pub const CURSOR_INNER_RADIUS: f32 = 14.0;
pub const CURSOR_OUTER_RADIUS: f32 = 16.0;
pub const CURSOR_SMOOTHING: f32 = 12.0;
pub const CURSOR_HOVER_SCALE: f32 = 2.2;
pub const CURSOR_DRAG_SCALE: f32 = 0.6;
