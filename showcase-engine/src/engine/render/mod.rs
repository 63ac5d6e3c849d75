//! Cameras, frame timing and post-processing for the three render layers.
//!
//! The photo layer holds the preview tiles and carries the border curvature
//! and blur passes. The cursor and project layers are drawn on top by their
//! own cameras without clearing.

/// Fullscreen iterative blur applied while the info panel is open.
pub mod blur_post_processing;

/// Fullscreen edge bending driven by border drags.
pub mod border_curvature;

/// Pointer-following ring on the cursor layer.
pub mod cursor_scene;

/// Clamped frame clock and the per-frame camera systems.
pub mod frame_loop;

/// Camera markers and spawning for the photo, cursor and project layers.
pub mod scene_cameras;
