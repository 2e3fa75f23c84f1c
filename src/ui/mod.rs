pub mod bundles;
pub mod components;
pub mod logic;
pub mod systems;

use crate::core::state::AppState;
use crate::fan::resources::FanSim;
use crate::ui::systems::*;
use bevy::prelude::*;

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::Loading),
            (spawn_control_panel, spawn_status_panel),
        )
        .add_systems(
            Update,
            (update_control_panel, update_status_text)
                .run_if(in_state(AppState::Running))
                .run_if(resource_changed::<FanSim>),
        );
    }
}
