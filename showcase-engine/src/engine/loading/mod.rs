//! Catalog loading and the screen shown until it completes.
//!
//! Loading either succeeds into `AppState::Running` or fails closed into
//! `AppState::LoadFailed`, where the loading screen stays up with the error.

/// Catalog request on web and native, polling and state transitions.
pub mod catalog_loader;

/// Loading and failure text overlay.
pub mod loading_screen;
