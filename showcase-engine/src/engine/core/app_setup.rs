use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::project_catalog::ProjectCatalog;
use crate::engine::camera::viewport_camera::{
    ViewportCamera, camera_controller, handle_viewport_resize, sync_camera_transforms,
};
use crate::engine::core::app_state::{AppState, ShowcaseSet};
use crate::engine::core::window_config::create_window_config;
use crate::engine::events::ShowcaseEventsPlugin;
use crate::engine::input::keyboard::handle_keyboard_shortcuts;
use crate::engine::input::pointer::{PointerState, track_pointer_input};
use crate::engine::layout::layout_manager::{
    animate_tiles, handle_layout_requests, refresh_overview_layout, start_layout_transition,
};
use crate::engine::layout::tiles::{apply_tile_transforms, detect_tile_hover, spawn_preview_tiles};
use crate::engine::loading::catalog_loader::{
    CatalogLoader, announce_catalog, announce_loading_failure, poll_catalog, start_loading,
};
use crate::engine::loading::loading_screen::{
    hide_loading_screen, show_loading_error, spawn_loading_screen,
};
use crate::engine::project::detail::{
    OpenedProject, apply_slide_transforms, drive_slider, fit_slides_to_viewport,
    handle_project_requests, route_tile_clicks,
};
use crate::engine::render::blur_post_processing::{
    BlurPostProcessPlugin, apply_info_toggles, update_post_fx_settings,
};
use crate::engine::render::border_curvature::{
    BorderCurvaturePlugin, accumulate_border_curvature,
};
use crate::engine::render::cursor_scene::{follow_cursor, spawn_cursor};
use crate::engine::render::frame_loop::{
    FrameClock, advance_frame_clock, animate_camera, drive_camera_movement,
};
use crate::engine::render::scene_cameras::spawn_scene_cameras;
use crate::engine::state::ShowcaseState;
use crate::rpc::web_rpc::WebRpcPlugin;

const BACKGROUND: Color = Color::srgb(0.07, 0.07, 0.08);

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ProjectCatalog as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ProjectCatalog>::new(&["json"]))
        .add_plugins(ShowcaseEventsPlugin)
        // Curvature registers the node the blur pass is ordered after.
        .add_plugins(BorderCurvaturePlugin)
        .add_plugins(BlurPostProcessPlugin)
        .add_plugins(WebRpcPlugin);

    // Initialise resources early
    app.insert_resource(ClearColor(BACKGROUND))
        .init_resource::<ShowcaseState>()
        .init_resource::<ViewportCamera>()
        .init_resource::<FrameClock>()
        .init_resource::<PointerState>()
        .init_resource::<OpenedProject>()
        .init_resource::<CatalogLoader>();

    app.add_systems(
        Startup,
        (
            initialise_viewport,
            spawn_scene_cameras,
            spawn_cursor,
            spawn_loading_screen,
            start_loading,
        )
            .chain(),
    )
    .add_systems(Update, poll_catalog.run_if(in_state(AppState::Loading)))
    .add_systems(
        OnEnter(AppState::Running),
        (spawn_preview_tiles, hide_loading_screen, announce_catalog),
    )
    .add_systems(
        OnEnter(AppState::LoadFailed),
        (show_loading_error, announce_loading_failure),
    );

    app.configure_sets(
        Update,
        (
            ShowcaseSet::Input,
            ShowcaseSet::Commands,
            ShowcaseSet::Frame,
            ShowcaseSet::Animate,
            ShowcaseSet::Present,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    app.add_systems(
        Update,
        (track_pointer_input, handle_keyboard_shortcuts).in_set(ShowcaseSet::Input),
    )
    .add_systems(
        Update,
        (
            handle_layout_requests,
            apply_info_toggles,
            route_tile_clicks,
            handle_project_requests,
            camera_controller,
        )
            .chain()
            .in_set(ShowcaseSet::Commands),
    )
    .add_systems(
        Update,
        (advance_frame_clock, animate_camera, drive_camera_movement)
            .chain()
            .in_set(ShowcaseSet::Frame),
    )
    .add_systems(
        Update,
        (
            refresh_overview_layout,
            start_layout_transition,
            animate_tiles,
            detect_tile_hover,
            fit_slides_to_viewport,
            drive_slider,
            accumulate_border_curvature,
            follow_cursor,
        )
            .chain()
            .in_set(ShowcaseSet::Animate),
    )
    .add_systems(
        Update,
        (
            sync_camera_transforms,
            apply_tile_transforms,
            apply_slide_transforms,
            update_post_fx_settings,
        )
            .in_set(ShowcaseSet::Present),
    );

    // Resizes are tracked in every state so the scene starts at the right size.
    app.add_systems(Update, handle_viewport_resize);

    app
}

/// Seed the viewport size from the primary window and centre the camera for it.
fn initialise_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut state: ResMut<ShowcaseState>,
    mut camera: ResMut<ViewportCamera>,
) {
    let Ok(window) = windows.single() else {
        warn!("No primary window; keeping the default viewport");
        return;
    };

    if let Err(err) = state.set_viewport(Vec2::new(window.width(), window.height())) {
        warn!("Ignoring initial viewport: {}", err);
    }
    *camera = ViewportCamera::for_state(&state);
    info!(
        "Viewport {}x{} ({})",
        window.width(),
        window.height(),
        if state.is_mobile() { "mobile" } else { "desktop" }
    );
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
