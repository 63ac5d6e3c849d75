//! Shared tuning constants for the showcase engine.

pub mod camera;
pub mod input;
pub mod layout;
pub mod render_settings;
pub mod slider;
pub mod world;
