use bevy::prelude::*;
use fansim::simulation::FanCommand;

/// A command for the fan, from the keyboard or the control panel.
#[derive(Message, Debug, Clone, Copy)]
pub struct FanCommandEvent(pub FanCommand);

/// Re-read `fansim_config.toml` and restart the simulation with it.
#[derive(Message, Debug, Clone, Copy)]
pub struct ReloadConfigEvent;
