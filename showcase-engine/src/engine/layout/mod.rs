//! Preview tile placement for the grid and overview layouts.
//!
//! Tiles keep both placements and tween between them whenever the layout
//! mode changes, in step with the camera's return to the layout origin.

/// Tile-to-layout assignment, transitions and resize handling.
pub mod layout_manager;

/// Masonry placement for the overview layout.
pub mod overview;

/// Preview tile component, placement interpolation and hit testing.
pub mod tiles;
