use bevy::prelude::*;

use crate::engine::events::{
    InfoPanelToggle, LayoutModeRequest, ProjectCloseRequest, SliderStepEvent,
};
use crate::engine::state::ShowcaseState;

/// Keyboard equivalents of the page controls.
///
/// On the web the page's own buttons drive these events through RPC, so the
/// keyboard is only read on native builds.
#[cfg_attr(target_arch = "wasm32", allow(unused_variables, unused_mut))]
pub fn handle_keyboard_shortcuts(
    state: Res<ShowcaseState>,
    mut layout: EventWriter<LayoutModeRequest>,
    mut info: EventWriter<InfoPanelToggle>,
    mut slider: EventWriter<SliderStepEvent>,
    mut close: EventWriter<ProjectCloseRequest>,
    #[cfg(not(target_arch = "wasm32"))] keyboard: Res<ButtonInput<KeyCode>>,
) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if keyboard.just_pressed(KeyCode::KeyG) && !state.is_project_open() {
            let mode = state.layout_mode().toggled();
            info!("Layout mode requested from keyboard: {}", mode.as_str());
            layout.write(LayoutModeRequest { mode });
        }

        if keyboard.just_pressed(KeyCode::KeyI) {
            info.write(InfoPanelToggle {
                open: !state.info_open(),
            });
        }

        if state.is_project_open() {
            if keyboard.just_pressed(KeyCode::ArrowLeft) {
                slider.write(SliderStepEvent { step: -1 });
            }
            if keyboard.just_pressed(KeyCode::ArrowRight) {
                slider.write(SliderStepEvent { step: 1 });
            }
            if keyboard.just_pressed(KeyCode::Escape) {
                close.write(ProjectCloseRequest);
            }
        }
    }
}
