//! Viewport camera system for dragging around the photo scene.
//!
//! Provides exponential-smoothing camera movement toward a drag target,
//! elastic border resistance at the world bounds, drag zoom and the layout
//! transition return-to-origin.

/// Per-edge elastic border pull state.
pub mod border_pull;

/// Orthographic projection extents and screen-to-world conversion.
pub mod projection;

/// Viewport camera resource and controller systems.
pub mod viewport_camera;
