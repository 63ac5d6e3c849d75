/// Press/release pairs that travel less than this (px) count as a click.
pub const CLICK_THRESHOLD: f32 = 6.0;

/// Border drag offset (px) that maps to full border curvature.
pub const BORDER_CURVATURE_RANGE: f32 = 300.0;

/// Upper bound on the per-edge curvature amount fed to the post pass.
pub const BORDER_CURVATURE_MAX: f32 = 0.08;

/// Rate at which border curvature relaxes once the drag stops.
pub const BORDER_CURVATURE_RELAX: f32 = 6.0;
