use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::camera::CAMERA_DEPTH;
use constants::render_settings::{CURSOR_LAYER, PHOTO_LAYER, PROJECT_LAYER};

use crate::engine::camera::projection::ViewportProjection;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::render::blur_post_processing::BlurSettings;
use crate::engine::render::border_curvature::BorderCurvatureSettings;
use crate::engine::state::ShowcaseState;

/// Every camera that shares the window viewport and follows resizes.
#[derive(Component)]
pub struct SceneCamera;

/// Renders the preview tiles; carries the post-processing settings.
#[derive(Component)]
pub struct PhotoCamera;

/// Screen-space overlay for the cursor ring.
#[derive(Component)]
pub struct CursorCamera;

/// Overlay for the opened project; mirrors the photo camera position.
#[derive(Component)]
pub struct ProjectCamera;

/// Spawn the photo, cursor and project cameras in render order.
pub fn spawn_scene_cameras(
    mut commands: Commands,
    state: Res<ShowcaseState>,
    camera: Res<ViewportCamera>,
) {
    let viewport = state.viewport();
    let projection = ViewportProjection::from_size(viewport.x, viewport.y);
    let looking_down = Transform::from_xyz(0.0, 0.0, CAMERA_DEPTH).looking_at(Vec3::ZERO, Vec3::Y);

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 0,
            ..default()
        },
        Projection::Orthographic(projection.orthographic(camera.zoom)),
        looking_down,
        RenderLayers::layer(PHOTO_LAYER),
        BorderCurvatureSettings::default(),
        BlurSettings::default(),
        PhotoCamera,
        SceneCamera,
    ));

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        Projection::Orthographic(projection.orthographic(1.0)),
        looking_down,
        RenderLayers::layer(CURSOR_LAYER),
        CursorCamera,
        SceneCamera,
    ));

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 2,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        Projection::Orthographic(projection.orthographic(1.0)),
        looking_down,
        RenderLayers::layer(PROJECT_LAYER),
        ProjectCamera,
        SceneCamera,
    ));
}
