use bevy::prelude::*;

/// Application lifecycle. The scene only runs once the catalog is in.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    /// The catalog could not be fetched or parsed; the scene never starts.
    LoadFailed,
}

/// Per-frame ordering of the running scene.
///
/// Input becomes events, events become state changes, the frame clock
/// advances the camera, animations step, and finally transforms and
/// post-processing uniforms are written for rendering.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseSet {
    Input,
    Commands,
    Frame,
    Animate,
    Present,
}
