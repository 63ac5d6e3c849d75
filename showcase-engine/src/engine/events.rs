//! Typed messages exchanged between input, camera, layout, project and render systems.

use bevy::prelude::*;

use crate::engine::camera::border_pull::Edge;
use crate::engine::state::LayoutMode;

/// Device that produced a drag. Touch drags are scaled and resisted differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Pointer,
    Touch,
}

/// Pointer or touch moved by `diff` window pixels while pressed on the scene.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneDragEvent {
    pub diff: Vec2,
    pub input: InputKind,
}

/// The drag started by the last press ended.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SceneDragEndEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Pull back while a drag is in progress.
    Out,
    /// Restore the resting zoom once the drag is released.
    In,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct DragZoomEvent {
    pub direction: ZoomDirection,
}

/// Ask for a layout mode; validated against the state store before it takes effect.
#[derive(Event, Debug, Clone, Copy)]
pub struct LayoutModeRequest {
    pub mode: LayoutMode,
}

/// The state store accepted a new layout mode.
#[derive(Event, Debug, Clone, Copy)]
pub struct LayoutModeChangedEvent {
    pub mode: LayoutMode,
}

/// Once per rendered frame, before any animation advances.
#[derive(Event, Debug, Clone, Copy)]
pub struct FrameUpdateEvent {
    pub timestamp: f64,
    pub delta: f32,
}

/// The camera is being dragged past `edge`; `offset` is the pointer travel since crossing.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct BorderDragEvent {
    pub edge: Edge,
    pub offset: f32,
}

/// Hovered tile changed. `None` when the pointer left every tile.
#[derive(Event, Debug, Clone)]
pub struct TileHoverEvent {
    pub model: Option<String>,
}

/// A press/release pair that did not turn into a drag, in window coordinates.
#[derive(Event, Debug, Clone, Copy)]
pub struct TileClickEvent {
    pub position: Vec2,
}

#[derive(Event, Debug, Clone)]
pub struct ProjectOpenRequest {
    pub model: String,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ProjectCloseRequest;

/// Move the opened project's slider by `step` slides.
#[derive(Event, Debug, Clone, Copy)]
pub struct SliderStepEvent {
    pub step: i32,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct InfoPanelToggle {
    pub open: bool,
}

/// Registers every showcase event type.
pub struct ShowcaseEventsPlugin;

impl Plugin for ShowcaseEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SceneDragEvent>()
            .add_event::<SceneDragEndEvent>()
            .add_event::<DragZoomEvent>()
            .add_event::<LayoutModeRequest>()
            .add_event::<LayoutModeChangedEvent>()
            .add_event::<FrameUpdateEvent>()
            .add_event::<BorderDragEvent>()
            .add_event::<TileHoverEvent>()
            .add_event::<TileClickEvent>()
            .add_event::<ProjectOpenRequest>()
            .add_event::<ProjectCloseRequest>()
            .add_event::<SliderStepEvent>()
            .add_event::<InfoPanelToggle>();
    }
}
