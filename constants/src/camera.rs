/// Exponential smoothing rate applied to the camera each frame (`delta * rate`).
pub const MOVEMENT_SMOOTHING: f32 = 4.0;

/// Velocities below this length squared count as "not moving".
pub const MOVING_EPSILON: f32 = 1e-6;

/// Drag delta scale for mouse/pen input.
pub const DRAG_SCALE_POINTER: f32 = 1.5;

/// Drag delta scale for touch input.
pub const DRAG_SCALE_TOUCH: f32 = 2.65;

/// Drag resistance once a border is pulled with a pointer.
pub const BORDER_RESISTANCE_POINTER: f32 = 0.35;

/// Drag resistance once a border is pulled with touch.
pub const BORDER_RESISTANCE_TOUCH: f32 = 0.5;

/// Distance inside the world bound the target snaps to after a border pull.
pub const BORDER_INNER_OFFSET: f32 = 60.0;

/// Zoom used in grid mode on desktop and in overview mode everywhere on desktop.
pub const GRID_ZOOM: f32 = 1.0;

/// Zoom reduction while dragging on desktop.
pub const DRAG_ZOOM_DELTA: f32 = 0.125;

/// Grid zoom on mobile viewports.
pub const MOBILE_GRID_ZOOM: f32 = 0.6;

/// Overview zoom on mobile viewports.
pub const MOBILE_OVERVIEW_ZOOM: f32 = 1.0;

/// Zoom while dragging on mobile viewports.
pub const MOBILE_DRAG_ZOOM: f32 = 0.5;

pub const ZOOM_TWEEN_SECS: f32 = 0.6;
pub const LAYOUT_TWEEN_SECS: f32 = 1.0;

/// Delay before the chained mobile zoom starts after a layout change.
pub const MOBILE_ZOOM_DELAY_SECS: f32 = 0.5;

/// Distance of the photo camera from the tile plane.
pub const CAMERA_DEPTH: f32 = 1000.0;
