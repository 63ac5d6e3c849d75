//! Single-project detail view: backdrop and photo slider on the project layer.

/// Overlay spawning, open/close handling and slide placement.
pub mod detail;

/// Index/offset state of the photo strip.
pub mod slider;
