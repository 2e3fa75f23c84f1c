use crate::airflow::{AirflowEmitter, Particle, ParticleView};
use crate::config::FanSimConfig;
use crate::controller::SpeedController;
use crate::motion::MotionIntegrator;
use crate::state::{FanPhase, FanState};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A user intent, as produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanCommand {
    TogglePower,
    PowerOn,
    PowerOff,
    SetLevel(u8),
    Increment,
    Decrement,
    Reset,
}

/// Owns the complete state of one fan: commanded state, motion, airflow
/// particles and the random source driving particle spawns.
///
/// Call [`FanSimulation::tick`] once per fixed frame period and the command
/// methods whenever input arrives. Everything runs on the caller's thread.
#[derive(Debug, Clone)]
pub struct FanSimulation<R = StdRng> {
    config: FanSimConfig,
    state: FanState,
    controller: SpeedController,
    motion: MotionIntegrator,
    airflow: AirflowEmitter,
    rng: R,
    ticks: u64,
}

impl FanSimulation<StdRng> {
    /// Particle spawns are seeded from the operating system.
    pub fn new(config: FanSimConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Same seed and same inputs replay the same particle history.
    pub fn seeded(config: FanSimConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for FanSimulation<StdRng> {
    fn default() -> Self {
        Self::new(FanSimConfig::default())
    }
}

impl<R: Rng> FanSimulation<R> {
    pub fn with_rng(config: FanSimConfig, rng: R) -> Self {
        Self {
            controller: SpeedController::new(&config.motion),
            motion: MotionIntegrator::new(&config.motion),
            airflow: AirflowEmitter::new(config.airflow.clone()),
            state: FanState::default(),
            config,
            rng,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &FanSimConfig {
        &self.config
    }

    pub fn state(&self) -> &FanState {
        &self.state
    }

    pub fn phase(&self) -> FanPhase {
        self.state.phase()
    }

    pub fn motion(&self) -> &MotionIntegrator {
        &self.motion
    }

    pub fn particles(&self) -> &[Particle] {
        self.airflow.particles()
    }

    pub fn particle_views(&self) -> impl Iterator<Item = ParticleView> + '_ {
        self.airflow.views()
    }

    /// Number of ticks since construction.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Places a particle directly, bypassing the spawn policy. Returns `false`
    /// when the population is at its cap.
    pub fn inject_particle(&mut self, particle: Particle) -> bool {
        self.airflow.inject(particle)
    }

    pub fn apply(&mut self, command: FanCommand) {
        debug!("Fan command: {command:?}");
        let before = self.state.phase();

        match command {
            FanCommand::TogglePower => self.controller.toggle_power(&mut self.state),
            FanCommand::PowerOn => self.controller.power_on(&mut self.state),
            FanCommand::PowerOff => self.controller.power_off(&mut self.state),
            FanCommand::SetLevel(level) => self.controller.set_speed_level(&mut self.state, level),
            FanCommand::Increment => self.controller.increment(&mut self.state),
            FanCommand::Decrement => self.controller.decrement(&mut self.state),
            FanCommand::Reset => self.reset_all(),
        }

        self.log_transition(before);
    }

    pub fn set_speed_level(&mut self, level: u8) {
        self.apply(FanCommand::SetLevel(level));
    }

    pub fn toggle_power(&mut self) {
        self.apply(FanCommand::TogglePower);
    }

    pub fn power_on(&mut self) {
        self.apply(FanCommand::PowerOn);
    }

    pub fn power_off(&mut self) {
        self.apply(FanCommand::PowerOff);
    }

    pub fn increment(&mut self) {
        self.apply(FanCommand::Increment);
    }

    pub fn decrement(&mut self) {
        self.apply(FanCommand::Decrement);
    }

    /// Stops the fan immediately, without coasting, and drops every particle.
    pub fn reset(&mut self) {
        self.apply(FanCommand::Reset);
    }

    /// Advances the simulation by one frame period.
    pub fn tick(&mut self) {
        let before = self.state.phase();

        self.motion.tick(&mut self.state);
        self.airflow.tick(&self.state, &mut self.rng);
        self.ticks += 1;

        self.log_transition(before);
    }

    fn reset_all(&mut self) {
        self.controller.reset(&mut self.state);
        self.motion.stop(&mut self.state);
        self.airflow.clear();
    }

    fn log_transition(&self, before: FanPhase) {
        let after = self.state.phase();
        if after != before {
            info!(
                "Fan {before} -> {after} (level {}, speed {:.2}/{:.2})",
                self.state.speed_level(),
                self.state.current_speed(),
                self.state.target_speed(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AirflowConfig, AmbientSpawnConfig};
    use crate::state::SpeedLevel;
    use glam::Vec2;
    use rstest::rstest;

    fn simulation() -> FanSimulation {
        FanSimulation::seeded(FanSimConfig::default(), 1234)
    }

    fn jet_only_config() -> FanSimConfig {
        FanSimConfig {
            airflow: AirflowConfig {
                ambient: AmbientSpawnConfig {
                    enabled: false,
                    ..AmbientSpawnConfig::default()
                },
                ..AirflowConfig::default()
            },
            ..FanSimConfig::default()
        }
    }

    #[test]
    fn test_toggle_scenario() {
        let mut sim = simulation();

        sim.toggle_power();
        assert!(sim.state().power_on());
        assert_eq!(sim.state().speed_level().get(), 3);
        assert_eq!(sim.state().target_speed(), 6.0);

        for _ in 0..24 {
            sim.tick();
        }
        assert_eq!(sim.state().current_speed(), 6.0);
        assert_eq!(sim.phase(), FanPhase::AtSpeed);

        sim.toggle_power();
        assert!(!sim.state().power_on());
        assert_eq!(sim.state().speed_level(), SpeedLevel::OFF);
        assert_eq!(sim.state().target_speed(), 0.0);
        assert_eq!(sim.phase(), FanPhase::SpinningDown);

        let off_rate = sim.motion().off_decel_rate();
        let mut previous = sim.state().current_speed();
        let mut ticks = 0;
        while sim.state().current_speed() > 0.0 {
            sim.tick();
            ticks += 1;
            let current = sim.state().current_speed();
            if current > 0.0 {
                assert!((previous - current - off_rate).abs() < 1e-4);
            }
            previous = current;
            assert!(ticks <= 28, "fan never stopped");
        }
        assert_eq!(sim.phase(), FanPhase::Off);
    }

    #[test]
    fn test_reset_after_commands() {
        let mut sim = simulation();
        sim.set_speed_level(5);
        for _ in 0..200 {
            sim.tick();
        }
        sim.decrement();
        sim.tick();
        assert!(!sim.particles().is_empty());

        sim.reset();

        let state = sim.state();
        assert!(!state.power_on());
        assert_eq!(state.speed_level(), SpeedLevel::OFF);
        assert_eq!(state.target_speed(), 0.0);
        assert_eq!(state.current_speed(), 0.0);
        assert!(sim.particles().is_empty());
        assert_eq!(sim.phase(), FanPhase::Off);
    }

    #[test]
    fn test_reset_keeps_heading() {
        let mut sim = simulation();
        sim.set_speed_level(2);
        for _ in 0..10 {
            sim.tick();
        }
        let heading = sim.state().rotation_angle();
        sim.reset();
        assert_eq!(sim.state().rotation_angle(), heading);
    }

    #[rstest]
    #[case(FanCommand::Increment, 5, 5)]
    #[case(FanCommand::Decrement, 0, 0)]
    #[case(FanCommand::Increment, 2, 3)]
    #[case(FanCommand::Decrement, 2, 1)]
    #[case(FanCommand::SetLevel(9), 2, 2)]
    #[case(FanCommand::PowerOff, 4, 0)]
    #[case(FanCommand::PowerOn, 0, 3)]
    #[case(FanCommand::PowerOn, 4, 4)]
    fn test_commands(#[case] command: FanCommand, #[case] from: u8, #[case] expected: u8) {
        let mut sim = simulation();
        sim.set_speed_level(from);
        sim.apply(command);
        assert_eq!(sim.state().speed_level().get(), expected);
        assert_eq!(sim.state().power_on(), expected > 0);
    }

    #[test]
    fn test_set_speed_level_twice_equals_once() {
        let mut once = simulation();
        once.set_speed_level(3);
        let mut twice = simulation();
        twice.set_speed_level(3);
        twice.set_speed_level(3);
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_particle_past_max_radius_is_gone_after_one_tick() {
        let mut sim = FanSimulation::seeded(jet_only_config(), 8);
        sim.set_speed_level(1);
        assert!(sim.inject_particle(Particle::new(Vec2::new(200.0 + 1e-3, 0.0))));

        sim.tick();

        assert!(sim.particles().iter().all(|particle| particle.distance() < 150.0));
    }

    #[test]
    fn test_seeded_runs_replay() {
        let mut a = simulation();
        let mut b = simulation();
        for sim in [&mut a, &mut b] {
            sim.set_speed_level(4);
            for _ in 0..300 {
                sim.tick();
            }
        }
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.tick_count(), 300);
    }

    #[test]
    fn test_particles_frozen_while_off() {
        let mut sim = simulation();
        sim.set_speed_level(5);
        for _ in 0..120 {
            sim.tick();
        }
        sim.power_off();
        let frozen = sim.particles().to_vec();
        for _ in 0..60 {
            sim.tick();
        }
        assert_eq!(sim.particles(), frozen.as_slice());
    }

    #[test]
    fn test_custom_rng_is_used() {
        let rng = StdRng::seed_from_u64(77);
        let mut sim = FanSimulation::with_rng(FanSimConfig::default(), rng);
        sim.set_speed_level(5);
        sim.tick();
        assert_eq!(sim.tick_count(), 1);
    }

    #[test]
    fn test_unvalidated_negative_speed_unit_never_reverses() {
        let mut config = FanSimConfig::default();
        config.motion.speed_unit = -2.0;
        let mut sim = FanSimulation::seeded(config, 1);
        sim.set_speed_level(3);

        for _ in 0..5 {
            sim.tick();
            assert!(sim.state().current_speed() >= 0.0);
        }
        assert_eq!(sim.phase(), FanPhase::AtSpeed);
    }
}
