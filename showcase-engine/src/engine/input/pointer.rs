use bevy::prelude::*;
use bevy::window::CursorMoved;
use constants::input::CLICK_THRESHOLD;

use crate::engine::events::{
    DragZoomEvent, InputKind, SceneDragEndEvent, SceneDragEvent, TileClickEvent, ZoomDirection,
};
use crate::engine::state::ShowcaseState;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActivePress {
    origin: Vec2,
    last: Vec2,
    input: InputKind,
    dragging: bool,
}

/// What a pointer move did to the current press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// No press, or still within the click threshold.
    None,
    /// Crossed the click threshold; carries the full travel since the press.
    Started(Vec2),
    Moved(Vec2),
}

/// How a press ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEnd {
    pub input: InputKind,
    pub position: Vec2,
    pub was_drag: bool,
}

/// A single press tracked from down to up.
///
/// Movement within `CLICK_THRESHOLD` pixels of the press point is held back,
/// so a release there is a click rather than a drag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragGesture {
    active: Option<ActivePress>,
}

impl DragGesture {
    pub fn press(&mut self, at: Vec2, input: InputKind) {
        self.active = Some(ActivePress {
            origin: at,
            last: at,
            input,
            dragging: false,
        });
    }

    pub fn move_to(&mut self, at: Vec2) -> GestureUpdate {
        let Some(press) = self.active.as_mut() else {
            return GestureUpdate::None;
        };

        let diff = at - press.last;
        press.last = at;

        if !press.dragging {
            if at.distance(press.origin) > CLICK_THRESHOLD {
                press.dragging = true;
                return GestureUpdate::Started(at - press.origin);
            }
            return GestureUpdate::None;
        }

        if diff == Vec2::ZERO {
            GestureUpdate::None
        } else {
            GestureUpdate::Moved(diff)
        }
    }

    pub fn release(&mut self) -> Option<GestureEnd> {
        self.active.take().map(|press| GestureEnd {
            input: press.input,
            position: press.last,
            was_drag: press.dragging,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some_and(|press| press.dragging)
    }

    pub fn input(&self) -> Option<InputKind> {
        self.active.map(|press| press.input)
    }
}

/// Pointer bookkeeping shared by the input, hover and cursor systems.
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    pub gesture: DragGesture,
    touch_id: Option<u64>,
    /// Model of the tile under the pointer, if any.
    pub hovered: Option<String>,
}

fn record_mouse(state: &mut ShowcaseState, position: Vec2) {
    if let Err(err) = state.set_mouse(position) {
        warn!("Ignoring pointer position: {}", err);
    }
}

/// Turn raw mouse and touch input into drag, zoom and click events.
///
/// Only one press is tracked at a time; a touch takes priority over the mouse.
pub fn track_pointer_input(
    mut cursor_moved: EventReader<CursorMoved>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut pointer: ResMut<PointerState>,
    mut state: ResMut<ShowcaseState>,
    mut drags: EventWriter<SceneDragEvent>,
    mut drag_ends: EventWriter<SceneDragEndEvent>,
    mut zooms: EventWriter<DragZoomEvent>,
    mut clicks: EventWriter<TileClickEvent>,
) {
    if let Some(moved) = cursor_moved.read().last() {
        record_mouse(&mut state, moved.position);
    }

    let mut update = GestureUpdate::None;
    let mut ended = None;
    let mut input = InputKind::Pointer;

    match pointer.touch_id {
        Some(id) => match touches.get_pressed(id) {
            Some(touch) => {
                input = InputKind::Touch;
                record_mouse(&mut state, touch.position());
                update = pointer.gesture.move_to(touch.position());
            }
            None => {
                pointer.touch_id = None;
                ended = pointer.gesture.release();
            }
        },
        None => {
            if let Some(touch) = touches.iter_just_pressed().next() {
                if !pointer.gesture.is_active() {
                    pointer.touch_id = Some(touch.id());
                    record_mouse(&mut state, touch.position());
                    pointer.gesture.press(touch.position(), InputKind::Touch);
                }
            }
        }
    }

    if pointer.touch_id.is_none() && ended.is_none() {
        let mouse_position = state.mouse();
        if mouse.just_pressed(MouseButton::Left) && !pointer.gesture.is_active() {
            pointer.gesture.press(mouse_position, InputKind::Pointer);
        } else if mouse.pressed(MouseButton::Left)
            && pointer.gesture.input() == Some(InputKind::Pointer)
        {
            update = pointer.gesture.move_to(mouse_position);
        }

        if mouse.just_released(MouseButton::Left)
            && pointer.gesture.input() == Some(InputKind::Pointer)
        {
            ended = pointer.gesture.release();
        }
    }

    match update {
        GestureUpdate::None => {}
        GestureUpdate::Started(diff) => {
            zooms.write(DragZoomEvent {
                direction: ZoomDirection::Out,
            });
            drags.write(SceneDragEvent { diff, input });
        }
        GestureUpdate::Moved(diff) => {
            drags.write(SceneDragEvent { diff, input });
        }
    }

    if let Some(end) = ended {
        if end.was_drag {
            drag_ends.write(SceneDragEndEvent);
            zooms.write(DragZoomEvent {
                direction: ZoomDirection::In,
            });
        } else {
            clicks.write(TileClickEvent {
                position: end.position,
            });
        }
    }
}
