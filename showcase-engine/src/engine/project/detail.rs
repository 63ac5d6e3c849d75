use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::render_settings::PROJECT_LAYER;
use constants::slider::{SLIDE_DEPTH, SLIDE_SIZE};

use super::slider::ProjectSlider;
use crate::engine::assets::project_catalog::{Project, ProjectCatalog};
use crate::engine::camera::projection::screen_to_world;
use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::events::{
    FrameUpdateEvent, ProjectCloseRequest, ProjectOpenRequest, SceneDragEndEvent, SceneDragEvent,
    SliderStepEvent, TileClickEvent,
};
use crate::engine::layout::tiles::{PreviewTile, tile_at};
use crate::engine::state::ShowcaseState;
use crate::rpc::web_rpc::WebRpcInterface;

const BACKDROP_EXTENT: f32 = 20_000.0;
const MOBILE_SLIDE_FILL: f32 = 0.9;

/// The project shown in the detail overlay, if any.
#[derive(Resource, Debug, Default)]
pub struct OpenedProject {
    pub model: Option<String>,
    /// Camera position when the project was opened; the overlay is centred here.
    pub anchor: Vec2,
    /// Uniform slide scale, below 1 on narrow viewports.
    pub slide_scale: f32,
    pub slider: ProjectSlider,
}

impl OpenedProject {
    pub fn is_open(&self) -> bool {
        self.model.is_some()
    }

    /// World-space centre of slide `index`.
    pub fn slide_centre(&self, index: usize) -> Vec2 {
        self.anchor + Vec2::new(self.slider.slide_position(index) * self.slide_scale, 0.0)
    }

    /// Index of the slide under the world-space `point`.
    pub fn slide_at(&self, point: Vec2) -> Option<usize> {
        let half = SLIDE_SIZE * self.slide_scale * 0.5;
        (0..self.slider.count())
            .find(|index| (point - self.slide_centre(*index)).abs().cmple(half).all())
    }
}

pub fn slide_scale_for(viewport: Vec2) -> f32 {
    (viewport.x * MOBILE_SLIDE_FILL / SLIDE_SIZE.x).min(1.0).max(0.1)
}

/// Everything spawned for the detail overlay; despawned together on close.
#[derive(Component)]
pub struct ProjectOverlay;

#[derive(Component, Debug, Clone, Copy)]
pub struct ProjectSlide {
    pub index: usize,
}

/// Route clicks: a tile opens its project, a click off the slides closes the open one.
pub fn route_tile_clicks(
    mut clicks: EventReader<TileClickEvent>,
    state: Res<ShowcaseState>,
    camera: Res<ViewportCamera>,
    opened: Res<OpenedProject>,
    tiles: Query<&PreviewTile>,
    mut opens: EventWriter<ProjectOpenRequest>,
    mut closes: EventWriter<ProjectCloseRequest>,
) {
    for click in clicks.read() {
        if opened.is_open() {
            let point = screen_to_world(click.position, state.viewport(), opened.anchor, 1.0);
            if opened.slide_at(point).is_none() {
                closes.write(ProjectCloseRequest);
            }
            continue;
        }

        if state.is_transitioning() {
            continue;
        }

        let point = screen_to_world(click.position, state.viewport(), camera.position, camera.zoom);
        if let Some(tile) = tile_at(tiles.iter(), point) {
            opens.write(ProjectOpenRequest {
                model: tile.model.clone(),
            });
        }
    }
}

fn project_summary(project: &Project) -> serde_json::Value {
    serde_json::json!({
        "model": project.model,
        "title": project.title,
        "category": project.category,
        "description": project.description,
        "slides": project.slides().len(),
    })
}

/// Open and close the detail overlay.
///
/// Close requests are applied before open requests, so opening another
/// project in the same frame replaces the current one. An open requested
/// during a layout transition waits until the camera has settled, since the
/// overlay is anchored at the camera position.
pub fn handle_project_requests(
    mut commands: Commands,
    mut deferred: Local<Option<ProjectOpenRequest>>,
    mut opens: EventReader<ProjectOpenRequest>,
    mut closes: EventReader<ProjectCloseRequest>,
    catalog: Option<Res<ProjectCatalog>>,
    camera: Res<ViewportCamera>,
    mut state: ResMut<ShowcaseState>,
    mut opened: ResMut<OpenedProject>,
    overlays: Query<Entity, With<ProjectOverlay>>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rpc: ResMut<WebRpcInterface>,
) {
    let close_requested = closes.read().count() > 0;
    let waiting = deferred.take().filter(|_| !close_requested);
    let mut open_request = opens.read().last().cloned().or(waiting);
    if state.is_transitioning() {
        if let Some(request) = open_request.take() {
            debug!("Opening {} once the layout transition ends", request.model);
            *deferred = Some(request);
        }
    }

    let replacing = open_request.as_ref().is_some_and(|request| {
        opened.model.as_deref() != Some(request.model.as_str())
    });
    if opened.is_open() && (close_requested || replacing) {
        for entity in overlays.iter() {
            commands.entity(entity).despawn();
        }
        if let Some(model) = opened.model.take() {
            info!("Closed project {}", model);
            rpc.send_notification("project_closed", serde_json::json!({ "model": model }));
        }
        state.set_opened_project(None);
    }

    let Some(request) = open_request else {
        return;
    };
    if opened.model.as_deref() == Some(request.model.as_str()) {
        return;
    }

    let Some(project) = catalog.as_deref().and_then(|c| c.find(&request.model)) else {
        warn!("Cannot open unknown project '{}'", request.model);
        return;
    };

    let slides = project.slides();
    *opened = OpenedProject {
        model: Some(project.model.clone()),
        anchor: camera.position,
        slide_scale: slide_scale_for(state.viewport()),
        slider: ProjectSlider::new(slides.len()),
    };
    state.set_opened_project(Some(project.model.clone()));

    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(BACKDROP_EXTENT, BACKDROP_EXTENT))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.04, 0.04, 0.05, 0.92),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::from_translation(opened.anchor.extend(0.0)),
        RenderLayers::layer(PROJECT_LAYER),
        ProjectOverlay,
    ));

    let slide_mesh = meshes.add(Rectangle::new(SLIDE_SIZE.x, SLIDE_SIZE.y));
    for (index, photo) in slides.iter().enumerate() {
        commands.spawn((
            Mesh3d(slide_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(photo.to_string())),
                unlit: true,
                ..default()
            })),
            Transform::from_translation(opened.slide_centre(index).extend(SLIDE_DEPTH))
                .with_scale(Vec3::splat(opened.slide_scale)),
            RenderLayers::layer(PROJECT_LAYER),
            ProjectOverlay,
            ProjectSlide { index },
        ));
    }

    info!("Opened project {} with {} slides", project.model, slides.len());
    rpc.send_notification("project_opened", project_summary(project));
}

/// Step, drag and animate the open project's slider.
pub fn drive_slider(
    mut steps: EventReader<SliderStepEvent>,
    mut drags: EventReader<SceneDragEvent>,
    mut drag_ends: EventReader<SceneDragEndEvent>,
    mut frames: EventReader<FrameUpdateEvent>,
    mut opened: ResMut<OpenedProject>,
) {
    if !opened.is_open() {
        steps.clear();
        drags.clear();
        drag_ends.clear();
        frames.clear();
        return;
    }

    for step in steps.read() {
        opened.slider.step(step.step);
    }

    let scale = opened.slide_scale.max(f32::EPSILON);
    for drag in drags.read() {
        opened.slider.drag(drag.diff.x / scale);
    }

    if drag_ends.read().count() > 0 {
        opened.slider.release();
    }

    let delta: f32 = frames.read().map(|frame| frame.delta).sum();
    if delta > 0.0 {
        opened.slider.tick(delta);
    }
}

/// Keep the open project's slides sized for the current viewport.
pub fn fit_slides_to_viewport(state: Res<ShowcaseState>, mut opened: ResMut<OpenedProject>) {
    if !state.is_changed() || !opened.is_open() {
        return;
    }
    let scale = slide_scale_for(state.viewport());
    if scale != opened.slide_scale {
        debug!("Rescaling slides to {:.3}", scale);
        opened.slide_scale = scale;
    }
}

pub fn apply_slide_transforms(
    opened: Res<OpenedProject>,
    mut slides: Query<(&ProjectSlide, &mut Transform)>,
) {
    if !opened.is_changed() {
        return;
    }
    for (slide, mut transform) in slides.iter_mut() {
        let centre = opened.slide_centre(slide.index);
        transform.translation.x = centre.x;
        transform.translation.y = centre.y;
        transform.scale = Vec3::splat(opened.slide_scale);
    }
}
