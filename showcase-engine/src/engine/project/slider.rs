use constants::slider::{SLIDE_SPACING, SLIDER_TWEEN_SECS};

use crate::engine::animation::{Easing, Tween, TweenSlot, TweenStep};

/// Horizontal photo strip of an opened project.
///
/// `offset` is the x of slide 0 relative to the strip anchor; slide `i` sits
/// at `offset + i * SLIDE_SPACING`. At rest the current slide is centred.
#[derive(Debug, Clone, Default)]
pub struct ProjectSlider {
    count: usize,
    index: usize,
    offset: f32,
    motion: TweenSlot<f32>,
}

impl ProjectSlider {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    fn resting_offset(index: usize) -> f32 {
        -(index as f32) * SLIDE_SPACING
    }

    fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    fn animate_to_index(&mut self) {
        let to = Self::resting_offset(self.index);
        self.motion.start(Tween::new(
            self.offset,
            to,
            SLIDER_TWEEN_SECS,
            Easing::EaseOutCubic,
        ));
    }

    /// Move by `step` slides, clamped to the strip. Returns the new index.
    pub fn step(&mut self, step: i32) -> usize {
        if self.count == 0 {
            return 0;
        }
        let target = (self.index as i64 + i64::from(step)).clamp(0, self.last_index() as i64);
        self.index = target as usize;
        self.animate_to_index();
        self.index
    }

    /// Follow a horizontal drag, allowing half a slide of overshoot at either end.
    pub fn drag(&mut self, dx: f32) {
        if self.count == 0 {
            return;
        }
        self.motion.cancel();
        let min = Self::resting_offset(self.last_index()) - SLIDE_SPACING * 0.5;
        let max = SLIDE_SPACING * 0.5;
        self.offset = (self.offset + dx).clamp(min, max);
    }

    /// Snap to the slide nearest the centre. Returns the new index.
    pub fn release(&mut self) -> usize {
        if self.count == 0 {
            return 0;
        }
        let nearest = (-self.offset / SLIDE_SPACING).round().max(0.0) as usize;
        self.index = nearest.min(self.last_index());
        self.animate_to_index();
        self.index
    }

    pub fn tick(&mut self, delta: f32) {
        match self.motion.tick(delta) {
            TweenStep::Running(offset) | TweenStep::Completed(offset) => self.offset = offset,
            TweenStep::Idle | TweenStep::Cancelled => {}
        }
    }

    /// X of slide `index` relative to the strip anchor.
    pub fn slide_position(&self, index: usize) -> f32 {
        self.offset + index as f32 * SLIDE_SPACING
    }
}
