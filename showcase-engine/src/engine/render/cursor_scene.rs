use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::render_settings::{
    CURSOR_DRAG_SCALE, CURSOR_HOVER_SCALE, CURSOR_INNER_RADIUS, CURSOR_LAYER, CURSOR_OUTER_RADIUS,
    CURSOR_SMOOTHING,
};

use crate::engine::camera::projection::screen_to_world;
use crate::engine::events::FrameUpdateEvent;
use crate::engine::input::pointer::PointerState;
use crate::engine::state::ShowcaseState;

/// Ring drawn by the cursor camera, eased toward the pointer.
#[derive(Component, Debug, Clone, Copy)]
pub struct CursorRing {
    pub position: Vec2,
    pub scale: f32,
}

impl Default for CursorRing {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CursorRing {
    /// Ease toward `target` and `target_scale`, frame-rate independent up to a full catch-up.
    pub fn follow(&mut self, target: Vec2, target_scale: f32, delta: f32) {
        let factor = (delta * CURSOR_SMOOTHING).clamp(0.0, 1.0);
        self.position = self.position.lerp(target, factor);
        self.scale += (target_scale - self.scale) * factor;
    }
}

pub fn cursor_scale(dragging: bool, hovering: bool) -> f32 {
    if dragging {
        CURSOR_DRAG_SCALE
    } else if hovering {
        CURSOR_HOVER_SCALE
    } else {
        1.0
    }
}

pub fn spawn_cursor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Annulus::new(CURSOR_INNER_RADIUS, CURSOR_OUTER_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
        Transform::default(),
        RenderLayers::layer(CURSOR_LAYER),
        CursorRing::default(),
    ));
}

/// The cursor camera sits at the origin with zoom 1, so overlay units are window pixels.
pub fn follow_cursor(
    mut frames: EventReader<FrameUpdateEvent>,
    state: Res<ShowcaseState>,
    pointer: Res<PointerState>,
    mut rings: Query<(&mut CursorRing, &mut Transform)>,
) {
    let delta: f32 = frames.read().map(|frame| frame.delta).sum();
    let target = screen_to_world(state.mouse(), state.viewport(), Vec2::ZERO, 1.0);
    let target_scale = cursor_scale(pointer.gesture.is_dragging(), pointer.hovered.is_some());

    for (mut ring, mut transform) in rings.iter_mut() {
        ring.follow(target, target_scale, delta);
        transform.translation = ring.position.extend(0.0);
        transform.scale = Vec3::splat(ring.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_wins_over_hovering() {
        assert_eq!(cursor_scale(true, true), CURSOR_DRAG_SCALE);
        assert_eq!(cursor_scale(false, true), CURSOR_HOVER_SCALE);
        assert_eq!(cursor_scale(false, false), 1.0);
    }

    #[test]
    fn ring_catches_up_on_long_frames() {
        let mut ring = CursorRing::default();
        ring.follow(Vec2::new(30.0, -10.0), 2.0, 1.0);
        assert_eq!(ring.position, Vec2::new(30.0, -10.0));
        assert_eq!(ring.scale, 2.0);
    }

    #[test]
    fn ring_eases_on_short_frames() {
        let mut ring = CursorRing::default();
        ring.follow(Vec2::new(100.0, 0.0), 1.0, 1.0 / 60.0);
        assert!(ring.position.x > 0.0 && ring.position.x < 100.0);
    }
}
