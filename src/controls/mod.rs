pub mod logic;
pub mod systems;

use crate::core::state::AppState;
use crate::controls::systems::*;
use crate::fan::systems::reload_fan_config;
use bevy::prelude::*;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (keyboard_controls, mouse_controls)
                .before(reload_fan_config)
                .run_if(in_state(AppState::Running)),
        );
    }
}
