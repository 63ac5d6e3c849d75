use bevy::math::Vec2;
use constants::camera::{
    BORDER_INNER_OFFSET, BORDER_RESISTANCE_POINTER, DRAG_SCALE_POINTER, LAYOUT_TWEEN_SECS,
};
use showcase_engine::engine::camera::border_pull::Edge;
use showcase_engine::engine::camera::viewport_camera::{LAYOUT_ORIGIN, ViewportCamera};
use showcase_engine::engine::events::InputKind;
use showcase_engine::engine::state::{LayoutMode, ShowcaseState};

const FRAME: f32 = 1.0 / 60.0;

fn run_frames(camera: &mut ViewportCamera, state: &mut ShowcaseState, frames: usize) -> Vec<Edge> {
    let mut entered = Vec::new();
    for frame in 0..frames {
        camera
            .animate(FRAME, state)
            .expect("camera animation keeps state valid");
        entered.extend(
            camera
                .handle_movement(frame as f64 * FRAME as f64, FRAME, state)
                .expect("movement keeps state valid"),
        );
    }
    entered
}

#[test]
fn dragging_past_the_right_edge_pulls_and_snaps_back() {
    let mut state = ShowcaseState::default();
    let mut camera = ViewportCamera::for_state(&state);
    let right = state.world_bounds().right;

    state.set_mouse(Vec2::new(200.0, 300.0)).expect("finite pointer");
    let pulled = camera.on_scene_drag(Vec2::new(-1000.0, 0.0), InputKind::Pointer, &state);
    assert!(pulled.is_empty());
    camera.on_scene_drag(Vec2::new(-1000.0, 0.0), InputKind::Pointer, &state);
    assert!(camera.target.x > right);

    let entered = run_frames(&mut camera, &mut state, 1);
    assert_eq!(entered, vec![Edge::Right]);
    assert_eq!(camera.border().resistance(), BORDER_RESISTANCE_POINTER);

    // Further drags are damped and report how far the pointer travelled.
    let before = camera.target.x;
    state.set_mouse(Vec2::new(100.0, 300.0)).expect("finite pointer");
    let pulled = camera.on_scene_drag(Vec2::new(-100.0, 0.0), InputKind::Pointer, &state);
    let step = camera.target.x - before;
    assert!((step - 100.0 * DRAG_SCALE_POINTER * BORDER_RESISTANCE_POINTER).abs() < 1e-3);
    assert_eq!(pulled.len(), 1);
    assert_eq!(pulled[0].edge, Edge::Right);
    assert_eq!(pulled[0].offset, 100.0);

    camera.on_scene_drag_end(&state);
    assert_eq!(camera.target.x, right - BORDER_INNER_OFFSET);
    assert_eq!(camera.border().resistance(), 1.0);

    run_frames(&mut camera, &mut state, 600);
    assert!((camera.position.x - (right - BORDER_INNER_OFFSET)).abs() < 1.0);
    assert!(!camera.border().any_pulling());
}

#[test]
fn layout_change_returns_to_origin_and_then_releases_movement() {
    let mut state = ShowcaseState::default();
    let mut camera = ViewportCamera::for_state(&state);

    camera.on_scene_drag(Vec2::new(-300.0, 200.0), InputKind::Pointer, &state);
    run_frames(&mut camera, &mut state, 120);
    assert!(camera.position.distance(LAYOUT_ORIGIN) > 100.0);

    state
        .set_layout_mode(LayoutMode::Overview)
        .expect("not transitioning yet");
    camera.on_layout_mode_change(LayoutMode::Overview, &mut state);
    assert!(state.is_transitioning());
    assert!(camera.is_movement_suppressed());
    assert!(state.set_layout_mode(LayoutMode::Grid).is_err());

    // Drags are dropped while the camera is on its way back.
    assert!(
        camera
            .on_scene_drag(Vec2::new(-500.0, 0.0), InputKind::Touch, &state)
            .is_empty()
    );

    let frames = (LAYOUT_TWEEN_SECS / FRAME).ceil() as usize + 1;
    run_frames(&mut camera, &mut state, frames);
    assert_eq!(camera.position, LAYOUT_ORIGIN);
    assert_eq!(state.camera(), LAYOUT_ORIGIN);
    assert!(!state.is_transitioning());
    assert!(!camera.is_movement_suppressed());
}

#[test]
fn overview_drags_only_scroll_vertically() {
    let mut state = ShowcaseState::default();
    state
        .set_layout_mode(LayoutMode::Overview)
        .expect("not transitioning");
    state.set_overview_height(2000.0).expect("positive height");
    let mut camera = ViewportCamera::for_state(&state);

    camera.on_scene_drag(Vec2::new(-400.0, -300.0), InputKind::Pointer, &state);
    assert_eq!(camera.target.x, 0.0);
    assert!(camera.target.y < 0.0);

    run_frames(&mut camera, &mut state, 600);
    assert_eq!(camera.position.x, 0.0);
    assert!(state.world_bounds().contains(camera.position));
}
