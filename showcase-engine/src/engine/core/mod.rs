//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and plugin
//! initialisation for both native and WASM targets.

/// Application setup, plugin configuration and system scheduling.
pub mod app_setup;

/// Lifecycle states and the per-frame system sets.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds to the page canvas on web targets.
pub mod window_config;
