use bevy::prelude::*;
use bevy::window::WindowResized;
use constants::camera::{
    BORDER_INNER_OFFSET, DRAG_SCALE_POINTER, DRAG_SCALE_TOUCH, DRAG_ZOOM_DELTA, GRID_ZOOM,
    LAYOUT_TWEEN_SECS, MOBILE_DRAG_ZOOM, MOBILE_GRID_ZOOM, MOBILE_OVERVIEW_ZOOM,
    MOBILE_ZOOM_DELAY_SECS, MOVEMENT_SMOOTHING, MOVING_EPSILON, ZOOM_TWEEN_SECS,
};

use crate::engine::animation::{Easing, Tween, TweenSlot, TweenStep};
use crate::engine::camera::border_pull::{BorderPull, Edge};
use crate::engine::camera::projection::ViewportProjection;
use crate::engine::events::{
    BorderDragEvent, DragZoomEvent, InputKind, LayoutModeChangedEvent, SceneDragEndEvent,
    SceneDragEvent, ZoomDirection,
};
use crate::engine::render::scene_cameras::{PhotoCamera, ProjectCamera, SceneCamera};
use crate::engine::state::{LayoutMode, ShowcaseState, StateError, WorldBounds};

/// Where the camera comes to rest after a layout change.
pub const LAYOUT_ORIGIN: Vec2 = Vec2::ZERO;

/// Pose and interaction state of the photo camera.
#[derive(Resource, Debug, Clone)]
pub struct ViewportCamera {
    pub target: Vec2,
    pub position: Vec2,
    pub zoom: f32,
    pub is_moving: bool,
    movement_suppressed: bool,
    input: InputKind,
    border: BorderPull,
    layout_tween: TweenSlot<Vec2>,
    zoom_tween: TweenSlot<f32>,
    last_timestamp: f64,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            position: Vec2::ZERO,
            zoom: GRID_ZOOM,
            is_moving: false,
            movement_suppressed: false,
            input: InputKind::Pointer,
            border: BorderPull::default(),
            layout_tween: TweenSlot::default(),
            zoom_tween: TweenSlot::default(),
            last_timestamp: 0.0,
        }
    }
}

impl ViewportCamera {
    /// Camera at rest for the current viewport class.
    pub fn for_state(state: &ShowcaseState) -> Self {
        Self {
            zoom: resting_zoom(state.layout_mode(), state.is_mobile()),
            ..default()
        }
    }

    pub fn border(&self) -> &BorderPull {
        &self.border
    }

    pub fn is_movement_suppressed(&self) -> bool {
        self.movement_suppressed
    }

    pub fn last_timestamp(&self) -> f64 {
        self.last_timestamp
    }

    /// Advance the camera toward its target by one frame.
    ///
    /// Uses exponential smoothing with factor `delta * 4`, capped at 1 so a
    /// single step never overshoots. Horizontal motion is frozen in overview
    /// mode. Publishes the new position and bounds to the state store, then
    /// runs border pull detection. Returns the edges entered this frame.
    pub fn handle_movement(
        &mut self,
        timestamp: f64,
        delta: f32,
        state: &mut ShowcaseState,
    ) -> Result<Vec<Edge>, StateError> {
        if self.movement_suppressed {
            return Ok(Vec::new());
        }
        self.last_timestamp = timestamp;

        let factor = (delta.max(0.0) * MOVEMENT_SMOOTHING).min(1.0);
        let mut velocity = (self.target - self.position) * factor;
        let overview = state.layout_mode() == LayoutMode::Overview;
        if overview {
            velocity.x = 0.0;
        }

        self.position += velocity;
        self.is_moving = velocity.length_squared() > MOVING_EPSILON;

        state.set_camera_position(self.position)?;
        let bounds = WorldBounds::for_layout(state.layout_mode(), state.overview_height());
        state.set_world_bounds(bounds)?;

        Ok(self
            .border
            .detect(self.target, &bounds, state.mouse(), self.input, overview))
    }

    /// Accumulate a drag into the target, scaled by input kind and border resistance.
    ///
    /// Returns one `BorderDragEvent` per edge currently being pulled.
    pub fn on_scene_drag(
        &mut self,
        diff: Vec2,
        input: InputKind,
        state: &ShowcaseState,
    ) -> Vec<BorderDragEvent> {
        if self.movement_suppressed {
            return Vec::new();
        }
        self.input = input;

        let scale = match input {
            InputKind::Pointer => DRAG_SCALE_POINTER,
            InputKind::Touch => DRAG_SCALE_TOUCH,
        } * self.border.resistance();

        // Content follows the finger: window y points down, world y points up.
        let mut delta = Vec2::new(-diff.x, diff.y) * scale;
        if state.layout_mode() == LayoutMode::Overview {
            delta.x = 0.0;
        }
        self.target += delta;

        let pointer = state.mouse();
        self.border
            .pulled_edges()
            .filter_map(|edge| {
                self.border
                    .offset(edge, pointer)
                    .map(|offset| BorderDragEvent { edge, offset })
            })
            .collect()
    }

    /// Snap the target just inside every pulled edge and clear the pull state.
    pub fn on_scene_drag_end(&mut self, state: &ShowcaseState) {
        let bounds = state.world_bounds();
        for edge in self.border.release() {
            edge.snap_inside(&mut self.target, &bounds, BORDER_INNER_OFFSET);
        }
    }

    pub fn on_drag_zoom_out(&mut self, state: &ShowcaseState) {
        if state.layout_mode() == LayoutMode::Overview {
            return;
        }
        let target = if state.is_mobile() {
            MOBILE_DRAG_ZOOM
        } else {
            resting_zoom(state.layout_mode(), false) - DRAG_ZOOM_DELTA
        };
        self.zoom_tween.start(Tween::new(
            self.zoom,
            target,
            ZOOM_TWEEN_SECS,
            Easing::EaseOutCubic,
        ));
    }

    pub fn on_drag_zoom_in(&mut self, state: &ShowcaseState) {
        if state.layout_mode() == LayoutMode::Overview {
            return;
        }
        let target = resting_zoom(state.layout_mode(), state.is_mobile());
        self.zoom_tween.start(Tween::new(
            self.zoom,
            target,
            ZOOM_TWEEN_SECS,
            Easing::EaseOutCubic,
        ));
    }

    /// Ease the camera back to the layout origin while normal movement is suspended.
    ///
    /// On mobile a delayed zoom tween to the new mode's zoom follows.
    pub fn on_layout_mode_change(&mut self, mode: LayoutMode, state: &mut ShowcaseState) {
        self.movement_suppressed = true;
        self.border.release();
        self.target = LAYOUT_ORIGIN;
        state.set_transitioning(true);

        self.layout_tween.start(Tween::new(
            self.position,
            LAYOUT_ORIGIN,
            LAYOUT_TWEEN_SECS,
            Easing::EaseInCubic,
        ));

        if state.is_mobile() {
            self.zoom_tween.start(
                Tween::new(
                    self.zoom,
                    resting_zoom(mode, true),
                    ZOOM_TWEEN_SECS,
                    Easing::EaseInOutCubic,
                )
                .with_delay(MOBILE_ZOOM_DELAY_SECS),
            );
        }
    }

    /// Advance the camera's layout and zoom tweens.
    pub fn animate(&mut self, delta: f32, state: &mut ShowcaseState) -> Result<(), StateError> {
        match self.layout_tween.tick(delta) {
            TweenStep::Running(position) => {
                self.position = position;
                state.set_camera_position(position)?;
            }
            TweenStep::Completed(position) => {
                self.position = position;
                self.target = position;
                self.movement_suppressed = false;
                state.set_transitioning(false);
                state.set_camera_position(position)?;
            }
            TweenStep::Cancelled => {
                self.movement_suppressed = false;
                state.set_transitioning(false);
            }
            TweenStep::Idle => {}
        }

        match self.zoom_tween.tick(delta) {
            TweenStep::Running(zoom) | TweenStep::Completed(zoom) => self.zoom = zoom,
            TweenStep::Cancelled | TweenStep::Idle => {}
        }

        Ok(())
    }

    /// Jump straight to the resting zoom, dropping any zoom animation.
    pub fn reset_zoom(&mut self, state: &ShowcaseState) {
        self.zoom_tween.cancel();
        self.zoom = resting_zoom(state.layout_mode(), state.is_mobile());
    }
}

/// Zoom the camera settles at for a layout mode and viewport class.
pub fn resting_zoom(mode: LayoutMode, mobile: bool) -> f32 {
    match (mobile, mode) {
        (false, _) => GRID_ZOOM,
        (true, LayoutMode::Grid) => MOBILE_GRID_ZOOM,
        (true, LayoutMode::Overview) => MOBILE_OVERVIEW_ZOOM,
    }
}

/// Route drag, zoom and layout events into the camera controller.
pub fn camera_controller(
    mut camera: ResMut<ViewportCamera>,
    mut state: ResMut<ShowcaseState>,
    mut drags: EventReader<SceneDragEvent>,
    mut drag_ends: EventReader<SceneDragEndEvent>,
    mut zooms: EventReader<DragZoomEvent>,
    mut layout_changes: EventReader<LayoutModeChangedEvent>,
    mut border_events: EventWriter<BorderDragEvent>,
    mut project_was_open: Local<bool>,
) {
    for change in layout_changes.read() {
        camera.on_layout_mode_change(change.mode, &mut state);
    }

    let project_open = state.is_project_open();
    if project_open && !*project_was_open {
        // The release that ends the current drag goes to the slider, so let go now.
        camera.on_scene_drag_end(&state);
        camera.on_drag_zoom_in(&state);
    }
    *project_was_open = project_open;

    // The opened project's slider owns drag input while it is visible.
    if project_open {
        drags.clear();
        drag_ends.clear();
        zooms.clear();
    }

    for drag in drags.read() {
        let pulled = camera.on_scene_drag(drag.diff, drag.input, &state);
        border_events.write_batch(pulled);
    }

    if drag_ends.read().count() > 0 {
        camera.on_scene_drag_end(&state);
    }

    for zoom in zooms.read() {
        match zoom.direction {
            ZoomDirection::Out => camera.on_drag_zoom_out(&state),
            ZoomDirection::In => camera.on_drag_zoom_in(&state),
        }
    }
}

/// Recompute projection extents for every scene camera when the window resizes.
pub fn handle_viewport_resize(
    mut resized: EventReader<WindowResized>,
    mut state: ResMut<ShowcaseState>,
    mut camera: ResMut<ViewportCamera>,
    mut projections: Query<&mut Projection, With<SceneCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };

    let was_mobile = state.is_mobile();
    if let Err(err) = state.set_viewport(Vec2::new(last.width, last.height)) {
        warn!("Ignoring resize: {}", err);
        return;
    }
    if was_mobile != state.is_mobile() {
        camera.reset_zoom(&state);
    }

    let viewport = ViewportProjection::from_size(last.width, last.height);
    for mut projection in &mut projections {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scaling_mode = viewport.orthographic(1.0).scaling_mode;
        }
    }
}

/// Copy the controller pose onto the photo camera and mirror it onto the project camera.
pub fn sync_camera_transforms(
    camera: Res<ViewportCamera>,
    mut photo: Query<
        (&mut Transform, &mut Projection),
        (With<PhotoCamera>, Without<ProjectCamera>),
    >,
    mut project: Query<&mut Transform, (With<ProjectCamera>, Without<PhotoCamera>)>,
) {
    if let Ok((mut transform, mut projection)) = photo.single_mut() {
        transform.translation.x = camera.position.x;
        transform.translation.y = camera.position.y;
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale = 1.0 / camera.zoom.max(f32::EPSILON);
        }
    }

    if let Ok(mut transform) = project.single_mut() {
        transform.translation.x = camera.position.x;
        transform.translation.y = camera.position.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::ShowcaseEventsPlugin;
    use bevy::render::camera::ScalingMode;

    fn desktop_state() -> ShowcaseState {
        let mut state = ShowcaseState::default();
        state.set_viewport(Vec2::new(1440.0, 900.0)).unwrap();
        state
    }

    fn mobile_state() -> ShowcaseState {
        let mut state = ShowcaseState::default();
        state.set_viewport(Vec2::new(390.0, 844.0)).unwrap();
        state
    }

    #[test]
    fn movement_never_overshoots_the_target() {
        for delta in [0.001_f32, 0.016, 0.1, 0.25, 0.5, 1.0] {
            let mut state = desktop_state();
            let mut camera = ViewportCamera::default();
            camera.target = Vec2::new(300.0, -120.0);

            let mut distance = camera.target.distance(camera.position);
            for frame in 0..200 {
                camera
                    .handle_movement(frame as f64 * delta as f64, delta, &mut state)
                    .unwrap();
                let next = camera.target.distance(camera.position);
                assert!(next <= distance + 1e-4, "delta {delta} frame {frame}");
                distance = next;
            }
        }
    }

    #[test]
    fn movement_publishes_position_and_bounds() {
        let mut state = desktop_state();
        let mut camera = ViewportCamera::default();
        camera.target = Vec2::new(100.0, 50.0);
        camera.handle_movement(0.016, 0.1, &mut state).unwrap();

        assert_eq!(state.camera(), camera.position);
        assert_eq!(camera.position, Vec2::new(40.0, 20.0));
        assert!(camera.is_moving);
        assert_eq!(
            state.world_bounds(),
            WorldBounds::for_layout(LayoutMode::Grid, 0.0)
        );
    }

    #[test]
    fn overview_freezes_horizontal_position() {
        let mut state = desktop_state();
        state.set_layout_mode(LayoutMode::Overview).unwrap();
        state.set_overview_height(3000.0).unwrap();

        let mut camera = ViewportCamera::default();
        camera.position = Vec2::new(25.0, 0.0);
        camera.target = Vec2::new(900.0, -400.0);
        for _ in 0..60 {
            camera.handle_movement(0.0, 0.016, &mut state).unwrap();
            assert_eq!(camera.position.x, 25.0);
        }
        assert!(camera.position.y < 0.0);
    }

    #[test]
    fn suppressed_movement_is_a_no_op() {
        let mut state = desktop_state();
        let mut camera = ViewportCamera::default();
        camera.on_layout_mode_change(LayoutMode::Overview, &mut state);
        camera.target = Vec2::new(500.0, 500.0);
        let before = camera.position;
        let entered = camera.handle_movement(1.0, 0.5, &mut state).unwrap();
        assert!(entered.is_empty());
        assert_eq!(camera.position, before);
    }

    #[test]
    fn drag_scales_by_input_kind() {
        let state = desktop_state();
        let mut camera = ViewportCamera::default();
        camera.on_scene_drag(Vec2::new(10.0, 4.0), InputKind::Pointer, &state);
        assert_eq!(camera.target, Vec2::new(-15.0, 6.0));

        let mut camera = ViewportCamera::default();
        camera.on_scene_drag(Vec2::new(10.0, 0.0), InputKind::Touch, &state);
        assert!((camera.target.x + 26.5).abs() < 1e-4);
    }

    #[test]
    fn crossing_right_edge_latches_once_and_records_pointer() {
        let mut state = desktop_state();
        let bounds = WorldBounds::for_layout(LayoutMode::Grid, 0.0);
        let mut camera = ViewportCamera::default();
        camera.target = Vec2::new(bounds.right + 20.0, 0.0);
        state.set_mouse(Vec2::new(640.0, 300.0)).unwrap();

        let entered = camera.handle_movement(0.0, 0.016, &mut state).unwrap();
        assert_eq!(entered, vec![Edge::Right]);
        assert_eq!(camera.border().edge(Edge::Right).reference, Vec2::new(640.0, 300.0));

        state.set_mouse(Vec2::new(600.0, 300.0)).unwrap();
        for _ in 0..5 {
            let again = camera.handle_movement(0.0, 0.016, &mut state).unwrap();
            assert!(again.is_empty());
        }
        assert_eq!(camera.border().edge(Edge::Right).reference, Vec2::new(640.0, 300.0));
        assert_eq!(camera.border().resistance(), constants::camera::BORDER_RESISTANCE_POINTER);
    }

    #[test]
    fn drag_while_pulled_is_resisted_and_reports_offset() {
        let mut state = desktop_state();
        let bounds = WorldBounds::for_layout(LayoutMode::Grid, 0.0);
        let mut camera = ViewportCamera::default();
        camera.target = Vec2::new(0.0, bounds.top + 1.0);
        state.set_mouse(Vec2::new(500.0, 400.0)).unwrap();
        camera.handle_movement(0.0, 0.016, &mut state).unwrap();

        state.set_mouse(Vec2::new(500.0, 480.0)).unwrap();
        let before = camera.target;
        let events = camera.on_scene_drag(Vec2::new(0.0, 80.0), InputKind::Pointer, &state);
        assert_eq!(
            events,
            vec![BorderDragEvent {
                edge: Edge::Top,
                offset: 80.0
            }]
        );
        let expected = 80.0 * DRAG_SCALE_POINTER * constants::camera::BORDER_RESISTANCE_POINTER;
        assert!((camera.target.y - before.y - expected).abs() < 1e-3);
    }

    #[test]
    fn drag_end_snaps_only_pulled_edges_inside() {
        let mut state = desktop_state();
        let bounds = WorldBounds::for_layout(LayoutMode::Grid, 0.0);
        let mut camera = ViewportCamera::default();
        camera.target = Vec2::new(bounds.right + 200.0, 123.0);
        camera.handle_movement(0.0, 0.016, &mut state).unwrap();

        camera.on_scene_drag_end(&state);
        assert_eq!(camera.target, Vec2::new(bounds.right - BORDER_INNER_OFFSET, 123.0));
        assert!(!camera.border().any_pulling());
        assert_eq!(camera.border().resistance(), 1.0);
    }

    #[test]
    fn drag_zoom_round_trip_on_desktop() {
        let mut state = desktop_state();
        let mut camera = ViewportCamera::for_state(&state);
        camera.on_drag_zoom_out(&state);
        camera.animate(ZOOM_TWEEN_SECS, &mut state).unwrap();
        assert!((camera.zoom - (GRID_ZOOM - DRAG_ZOOM_DELTA)).abs() < 1e-5);

        camera.on_drag_zoom_in(&state);
        camera.animate(ZOOM_TWEEN_SECS, &mut state).unwrap();
        assert!((camera.zoom - GRID_ZOOM).abs() < 1e-5);
    }

    #[test]
    fn drag_zoom_uses_mobile_constant() {
        let mut state = mobile_state();
        let mut camera = ViewportCamera::for_state(&state);
        assert_eq!(camera.zoom, MOBILE_GRID_ZOOM);
        camera.on_drag_zoom_out(&state);
        camera.animate(ZOOM_TWEEN_SECS, &mut state).unwrap();
        assert!((camera.zoom - MOBILE_DRAG_ZOOM).abs() < 1e-5);
    }

    #[test]
    fn drag_zoom_is_ignored_in_overview() {
        let mut state = desktop_state();
        state.set_layout_mode(LayoutMode::Overview).unwrap();
        let mut camera = ViewportCamera::for_state(&state);
        camera.on_drag_zoom_out(&state);
        camera.animate(ZOOM_TWEEN_SECS, &mut state).unwrap();
        assert_eq!(camera.zoom, GRID_ZOOM);
    }

    #[test]
    fn layout_change_returns_to_origin_then_releases_movement() {
        let mut state = desktop_state();
        let mut camera = ViewportCamera::default();
        camera.position = Vec2::new(800.0, -300.0);
        camera.target = camera.position;

        state.set_layout_mode(LayoutMode::Overview).unwrap();
        camera.on_layout_mode_change(LayoutMode::Overview, &mut state);
        assert!(state.is_transitioning());
        assert!(camera.is_movement_suppressed());

        camera.animate(LAYOUT_TWEEN_SECS * 0.5, &mut state).unwrap();
        assert!(camera.position.length() > 0.0);
        assert!(camera.position.length() < Vec2::new(800.0, -300.0).length());

        camera.animate(LAYOUT_TWEEN_SECS, &mut state).unwrap();
        assert_eq!(camera.position, LAYOUT_ORIGIN);
        assert_eq!(camera.target, LAYOUT_ORIGIN);
        assert!(!state.is_transitioning());
        assert!(!camera.is_movement_suppressed());
    }

    #[test]
    fn mobile_layout_change_chains_a_delayed_zoom() {
        let mut state = mobile_state();
        let mut camera = ViewportCamera::for_state(&state);
        state.set_layout_mode(LayoutMode::Overview).unwrap();
        camera.on_layout_mode_change(LayoutMode::Overview, &mut state);

        camera.animate(MOBILE_ZOOM_DELAY_SECS * 0.5, &mut state).unwrap();
        assert_eq!(camera.zoom, MOBILE_GRID_ZOOM);

        camera
            .animate(MOBILE_ZOOM_DELAY_SECS + ZOOM_TWEEN_SECS, &mut state)
            .unwrap();
        assert!((camera.zoom - MOBILE_OVERVIEW_ZOOM).abs() < 1e-5);
    }

    fn controller_app(state: ShowcaseState) -> App {
        let camera = ViewportCamera::for_state(&state);
        let mut app = App::new();
        app.add_plugins(ShowcaseEventsPlugin)
            .insert_resource(state)
            .insert_resource(camera)
            .add_systems(Update, camera_controller);
        app
    }

    fn set_opened(app: &mut App, model: Option<&str>) {
        app.world_mut()
            .resource_mut::<ShowcaseState>()
            .set_opened_project(model.map(str::to_string));
    }

    #[test]
    fn opening_a_project_lets_go_of_a_border_pull() {
        let state = desktop_state();
        let right = state.world_bounds().right;
        let mut app = controller_app(state);

        for _ in 0..2 {
            app.world_mut().send_event(SceneDragEvent {
                diff: Vec2::new(-1000.0, 0.0),
                input: InputKind::Pointer,
            });
        }
        app.world_mut().send_event(DragZoomEvent {
            direction: ZoomDirection::Out,
        });
        app.update();

        app.world_mut()
            .resource_scope(|world, mut camera: Mut<ViewportCamera>| {
                let mut state = world.resource_mut::<ShowcaseState>();
                camera.animate(ZOOM_TWEEN_SECS, &mut state).unwrap();
                camera.handle_movement(0.0, 0.016, &mut state).unwrap();
            });
        {
            let camera = app.world().resource::<ViewportCamera>();
            assert!(camera.border().is_pulling(Edge::Right));
            assert!(camera.zoom < GRID_ZOOM);
        }

        // The pointer is released over the project overlay.
        set_opened(&mut app, Some("harbour"));
        app.world_mut().send_event(SceneDragEndEvent);
        app.update();
        set_opened(&mut app, None);
        app.update();

        app.world_mut()
            .resource_scope(|world, mut camera: Mut<ViewportCamera>| {
                let mut state = world.resource_mut::<ShowcaseState>();
                camera.animate(ZOOM_TWEEN_SECS, &mut state).unwrap();
            });
        let camera = app.world().resource::<ViewportCamera>();
        assert!(!camera.border().any_pulling());
        assert_eq!(camera.border().resistance(), 1.0);
        assert!((camera.zoom - resting_zoom(LayoutMode::Grid, false)).abs() < 1e-5);
        assert_eq!(camera.target.x, right - BORDER_INNER_OFFSET);
    }

    #[test]
    fn drags_are_ignored_while_a_project_is_open() {
        let mut app = controller_app(desktop_state());
        set_opened(&mut app, Some("harbour"));
        app.world_mut().send_event(SceneDragEvent {
            diff: Vec2::new(-200.0, 80.0),
            input: InputKind::Touch,
        });
        app.update();
        assert_eq!(app.world().resource::<ViewportCamera>().target, Vec2::ZERO);
    }

    #[test]
    fn resize_updates_every_scene_camera() {
        let state = desktop_state();
        let camera = ViewportCamera::for_state(&state);
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WindowResized>()
            .insert_resource(state)
            .insert_resource(camera)
            .add_systems(Update, handle_viewport_resize);

        let initial = ViewportProjection::from_size(1440.0, 900.0).orthographic(1.0);
        let cameras: Vec<Entity> = (0..3)
            .map(|_| {
                app.world_mut()
                    .spawn((SceneCamera, Projection::Orthographic(initial.clone())))
                    .id()
            })
            .collect();

        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 390.0,
            height: 844.0,
        });
        app.update();

        let state = app.world().resource::<ShowcaseState>();
        assert_eq!(state.viewport(), Vec2::new(390.0, 844.0));
        assert!(state.is_mobile());
        assert_eq!(app.world().resource::<ViewportCamera>().zoom, MOBILE_GRID_ZOOM);

        for entity in cameras {
            let Some(Projection::Orthographic(ortho)) = app.world().get::<Projection>(entity)
            else {
                panic!("scene cameras stay orthographic");
            };
            match ortho.scaling_mode {
                ScalingMode::Fixed { width, height } => {
                    assert_eq!(width, 390.0);
                    assert_eq!(height, 844.0);
                }
                other => panic!("unexpected scaling mode {other:?}"),
            }
        }
    }
}
