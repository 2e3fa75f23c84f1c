pub mod components;
pub mod events;
pub mod logic;
pub mod resources;
pub mod systems;

use crate::core::state::AppState;
use crate::fan::events::*;
use crate::fan::resources::*;
use crate::fan::systems::*;
use bevy::prelude::*;

pub struct FanPlugin;

impl Plugin for FanPlugin {
    fn build(&self, app: &mut App) {
        let config = fansim::get_config();
        // logged so a session's airflow can be replayed with FanSimulation::seeded
        let seed: u64 = rand::random();
        info!(
            "Fan simulation at {} Hz, seed {}",
            config.clock.tick_hz, seed
        );

        app.insert_resource(Time::<Fixed>::from_hz(config.clock.tick_hz))
            .insert_resource(FanSim::new(config, seed))
            .add_message::<FanCommandEvent>()
            .add_message::<ReloadConfigEvent>()
            .add_systems(OnEnter(AppState::Loading), spawn_fan_scene)
            .add_systems(
                FixedUpdate,
                tick_fan.run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                (
                    reload_fan_config,
                    apply_fan_commands,
                    sync_blade_rotation,
                    draw_safety_cage,
                    draw_airflow,
                )
                    .chain()
                    .run_if(in_state(AppState::Running)),
            );
    }
}
