//! Pointer, touch and keyboard input translated into showcase events.

/// Press/drag/release tracking for mouse and touch, with click detection.
pub mod pointer;

/// Native keyboard shortcuts mirroring the page controls.
pub mod keyboard;
