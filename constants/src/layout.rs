/// Overview columns on desktop viewports.
pub const OVERVIEW_COLUMNS_DESKTOP: usize = 3;

/// Overview columns on mobile viewports.
pub const OVERVIEW_COLUMNS_MOBILE: usize = 2;

/// Width every tile is scaled to in overview mode.
pub const OVERVIEW_TILE_WIDTH: f32 = 360.0;

/// Gap between overview columns and rows.
pub const OVERVIEW_GAP: f32 = 40.0;

pub const TILE_TWEEN_SECS: f32 = 1.0;

/// Viewports narrower than this (logical px) use the mobile layout.
pub const MOBILE_BREAKPOINT: f32 = 768.0;
