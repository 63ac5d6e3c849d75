//! Time-driven interpolation used by the camera, layout and slider.
//!
//! Each animated subsystem owns a `TweenSlot`, an explicit
//! idle/animating/cancelling state machine advanced from the frame update,
//! instead of holding on to ad hoc tween handles.

/// Easing curves mapping normalised time to progress.
pub mod easing;

/// Tween values, slots and generation tokens.
pub mod tween;

pub use easing::Easing;
pub use tween::{Lerp, Tween, TweenPhase, TweenSlot, TweenStep, TweenToken};
