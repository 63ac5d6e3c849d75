/// Width of the draggable grid world.
pub const WORLD_WIDTH: f32 = 4000.0;

/// Height of the draggable grid world.
pub const WORLD_HEIGHT: f32 = 3000.0;

/// How far above the first overview row the camera may rest.
pub const OVERVIEW_TOP_MARGIN: f32 = 40.0;
