mod controls;
mod core;
mod fan;
mod helpers;
mod ui;

use crate::controls::ControlsPlugin;
use crate::core::camera::CameraPlugin;
use crate::core::state::AppState;
use crate::fan::FanPlugin;
use crate::ui::UIPlugin;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::prelude::*;

pub struct DeskFanPlugin;

impl Plugin for DeskFanPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_plugins((CameraPlugin, FanPlugin, ControlsPlugin, UIPlugin))
            .add_systems(
                OnEnter(AppState::Loading),
                transition_to_running_after_loading,
            );

        #[cfg(debug_assertions)]
        {
            app.add_plugins((
                FrameTimeDiagnosticsPlugin::default(),
                LogDiagnosticsPlugin::default(),
            ));
        }
    }
}

fn transition_to_running_after_loading(mut next_state: ResMut<NextState<AppState>>) {
    // Scene entities are spawned by the OnEnter(Loading) systems of each plugin
    next_state.set(AppState::Running);
}
