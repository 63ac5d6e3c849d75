use bevy::prelude::*;
use bevy::time::Real;
use constants::render_settings::MAX_FRAME_DELTA;

use crate::engine::camera::viewport_camera::ViewportCamera;
use crate::engine::events::FrameUpdateEvent;
use crate::engine::state::ShowcaseState;

/// Per-frame timing with the delta clamped against tab-suspend spikes.
#[derive(Resource, Debug, Default, Clone)]
pub struct FrameClock {
    previous: Option<f64>,
    timestamp: f64,
    delta: f32,
}

impl FrameClock {
    /// Record a new frame at `now` seconds and return its delta.
    ///
    /// The first frame has a delta of zero. Later deltas are clamped to
    /// `[0, MAX_FRAME_DELTA]` however long the gap between frames was.
    pub fn tick(&mut self, now: f64) -> f32 {
        let delta = match self.previous {
            Some(previous) => ((now - previous) as f32).clamp(0.0, MAX_FRAME_DELTA),
            None => 0.0,
        };
        self.previous = Some(now);
        self.timestamp = now;
        self.delta = delta;
        delta
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

/// Advance the clock from wall-clock time and broadcast the frame update.
pub fn advance_frame_clock(
    time: Res<Time<Real>>,
    mut clock: ResMut<FrameClock>,
    mut frames: EventWriter<FrameUpdateEvent>,
) {
    let now = time.elapsed_secs_f64();
    let delta = clock.tick(now);
    frames.write(FrameUpdateEvent {
        timestamp: now,
        delta,
    });
}

/// Advance the camera's zoom and layout tweens.
pub fn animate_camera(
    mut frames: EventReader<FrameUpdateEvent>,
    mut camera: ResMut<ViewportCamera>,
    mut state: ResMut<ShowcaseState>,
) {
    for frame in frames.read() {
        if let Err(err) = camera.animate(frame.delta, &mut state) {
            warn!("Camera animation produced an invalid state: {}", err);
        }
    }
}

/// Move the camera toward its target, unless a project is open.
pub fn drive_camera_movement(
    mut frames: EventReader<FrameUpdateEvent>,
    mut camera: ResMut<ViewportCamera>,
    mut state: ResMut<ShowcaseState>,
) {
    if state.is_project_open() {
        frames.clear();
        return;
    }

    for frame in frames.read() {
        match camera.handle_movement(frame.timestamp, frame.delta, &mut state) {
            Ok(entered) => {
                for edge in entered {
                    debug!("Border pull started at {:?}", edge);
                }
            }
            Err(err) => warn!("Camera movement produced an invalid state: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(12.5), 0.0);
        assert_eq!(clock.timestamp(), 12.5);
    }

    #[test]
    fn delta_is_clamped_to_one_second() {
        let mut clock = FrameClock::default();
        clock.tick(0.0);
        assert!((clock.tick(0.016) - 0.016).abs() < 1e-6);
        assert_eq!(clock.tick(45.0), MAX_FRAME_DELTA);
        assert_eq!(clock.delta(), MAX_FRAME_DELTA);
        assert!((clock.tick(45.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn time_running_backwards_yields_zero_delta() {
        let mut clock = FrameClock::default();
        clock.tick(10.0);
        assert_eq!(clock.tick(9.0), 0.0);
    }

    #[test]
    fn every_broadcast_frame_is_clamped() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<FrameUpdateEvent>()
            .init_resource::<FrameClock>()
            .add_systems(Update, advance_frame_clock);

        app.update();
        app.update();

        let events = app.world().resource::<Events<FrameUpdateEvent>>();
        let mut cursor = events.get_cursor();
        let frames: Vec<FrameUpdateEvent> = cursor.read(events).copied().collect();
        assert!(!frames.is_empty());
        for frame in frames {
            assert!((0.0..=MAX_FRAME_DELTA).contains(&frame.delta));
        }
    }
}
