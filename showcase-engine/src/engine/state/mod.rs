//! Typed application state shared by every showcase system.
//!
//! One `ShowcaseState` resource holds the scalars the scene reads each frame:
//! pointer position, camera position, world bounds, layout mode and the
//! transition flag. Mutation only happens through validated setters.

/// Grid/overview layout mode.
pub mod layout_mode;

/// Application state resource with validated setters.
pub mod showcase_state;

/// World bound rectangle derived from layout mode.
pub mod world_bounds;

pub use layout_mode::LayoutMode;
pub use showcase_state::{ShowcaseState, StateError};
pub use world_bounds::WorldBounds;
