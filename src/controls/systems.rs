use crate::controls::logic::*;
use crate::core::camera::components::MainCamera;
use crate::core::camera::systems::cursor_scene_position;
use crate::fan::events::{FanCommandEvent, ReloadConfigEvent};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    mut fan_commands: MessageWriter<FanCommandEvent>,
    mut reloads: MessageWriter<ReloadConfigEvent>,
    mut exit: MessageWriter<AppExit>,
) {
    for key in keys.get_just_pressed() {
        match key_action(*key) {
            Some(ControlAction::Fan(command)) => {
                fan_commands.write(FanCommandEvent(command));
            }
            Some(ControlAction::ReloadConfig) => {
                reloads.write(ReloadConfigEvent);
            }
            Some(ControlAction::Exit) => {
                info!("Exit requested");
                exit.write(AppExit::Success);
            }
            None => {}
        }
    }
}

pub fn mouse_controls(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut fan_commands: MessageWriter<FanCommandEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(point) = cursor_scene_position(&windows, &cameras) else {
        return;
    };
    if let Some(command) = hit_test(point) {
        fan_commands.write(FanCommandEvent(command));
    }
}
