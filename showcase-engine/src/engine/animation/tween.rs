use bevy::prelude::*;

use super::Easing;

/// Values a tween can interpolate.
pub trait Lerp: Copy {
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Lerp for Vec3 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// Interpolation from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: f32,
    delay: f32,
    elapsed: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            easing,
        }
    }

    /// Hold the start value for `delay` seconds before interpolating.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn target(&self) -> T {
        self.to
    }

    /// Normalised progress in [0, 1], ignoring easing.
    pub fn progress(&self) -> f32 {
        let active = self.elapsed - self.delay;
        if active <= 0.0 {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            (active / self.duration).min(1.0)
        }
    }

    pub fn sample(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp_to(self.to, self.easing.apply(self.progress()))
    }

    pub fn advance(&mut self, delta: f32) -> T {
        self.elapsed += delta.max(0.0);
        self.sample()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TweenPhase {
    #[default]
    Idle,
    Animating,
    Cancelling,
}

/// Outcome of advancing a slot by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep<T> {
    Idle,
    Running(T),
    Completed(T),
    Cancelled,
}

/// Identifies the tween a slot was started with; superseded tweens get stale tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TweenToken(u64);

/// Single-occupancy tween holder with explicit idle/animating/cancelling phases.
#[derive(Debug, Clone)]
pub struct TweenSlot<T> {
    phase: TweenPhase,
    tween: Option<Tween<T>>,
    generation: u64,
}

impl<T> Default for TweenSlot<T> {
    fn default() -> Self {
        Self {
            phase: TweenPhase::Idle,
            tween: None,
            generation: 0,
        }
    }
}

impl<T: Lerp> TweenSlot<T> {
    /// Start `tween`, replacing whatever was in flight.
    pub fn start(&mut self, tween: Tween<T>) -> TweenToken {
        self.generation += 1;
        self.tween = Some(tween);
        self.phase = TweenPhase::Animating;
        self.token()
    }

    /// Stop the running tween. The next `tick` reports `Cancelled`.
    pub fn cancel(&mut self) {
        if self.phase == TweenPhase::Animating {
            self.tween = None;
            self.phase = TweenPhase::Cancelling;
        }
    }

    pub fn tick(&mut self, delta: f32) -> TweenStep<T> {
        match self.phase {
            TweenPhase::Idle => TweenStep::Idle,
            TweenPhase::Cancelling => {
                self.phase = TweenPhase::Idle;
                TweenStep::Cancelled
            }
            TweenPhase::Animating => {
                let Some(tween) = self.tween.as_mut() else {
                    self.phase = TweenPhase::Idle;
                    return TweenStep::Idle;
                };
                let value = tween.advance(delta);
                if tween.is_finished() {
                    self.tween = None;
                    self.phase = TweenPhase::Idle;
                    TweenStep::Completed(value)
                } else {
                    TweenStep::Running(value)
                }
            }
        }
    }

    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == TweenPhase::Animating
    }

    pub fn token(&self) -> TweenToken {
        TweenToken(self.generation)
    }

    /// True while `token` belongs to the tween currently animating.
    pub fn is_current(&self, token: TweenToken) -> bool {
        self.is_animating() && token == self.token()
    }

    pub fn target(&self) -> Option<T> {
        self.tween.as_ref().map(Tween::target)
    }
}
