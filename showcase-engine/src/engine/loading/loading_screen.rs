use bevy::prelude::*;

use super::catalog_loader::LoadingError;

#[derive(Component)]
pub struct LoadingScreen;

#[derive(Component)]
pub struct LoadingMessage;

pub fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            LoadingScreen,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading projects"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                LoadingMessage,
            ));
        });
}

pub fn hide_loading_screen(mut commands: Commands, screens: Query<Entity, With<LoadingScreen>>) {
    for entity in screens.iter() {
        commands.entity(entity).despawn();
    }
}

/// Keep the loading screen up and replace its text with the failure reason.
pub fn show_loading_error(
    error: Res<LoadingError>,
    mut messages: Query<(&mut Text, &mut TextColor), With<LoadingMessage>>,
) {
    for (mut text, mut colour) in messages.iter_mut() {
        text.0 = format!("Projects could not be loaded: {}", error.0);
        colour.0 = Color::srgb(0.9, 0.35, 0.3);
    }
}
