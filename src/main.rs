// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use desk_fan::DeskFanPlugin;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.9, 0.9, 0.95)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Desk Fan".into(),
                resolution: WindowResolution::new(800, 600),
                present_mode: PresentMode::AutoVsync,
                resize_constraints: WindowResizeConstraints {
                    min_width: 400.0,
                    min_height: 300.0,
                    ..default()
                },
                ..default()
            }),
            ..default()
        }))
        .add_plugins(DeskFanPlugin)
        .run();
}
