use bevy::prelude::*;
use fansim::config::FanSimConfig;
use fansim::simulation::FanSimulation;

/// The one fan simulation of the app. Systems get exclusive access through
/// `ResMut`, so ticks and commands never interleave.
#[derive(Resource, Deref, DerefMut)]
pub struct FanSim(FanSimulation);

impl FanSim {
    pub fn new(config: FanSimConfig, seed: u64) -> Self {
        Self(FanSimulation::seeded(config, seed))
    }
}
