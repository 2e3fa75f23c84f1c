use crate::config::MotionConfig;
use crate::state::{FanState, SpeedLevel};
use log::{debug, warn};

/// Translates user commands into speed level, power flag and target speed.
#[derive(Debug, Clone)]
pub struct SpeedController {
    speed_unit: f32,
    default_level: SpeedLevel,
}

impl SpeedController {
    pub fn new(config: &MotionConfig) -> Self {
        let default_level = match SpeedLevel::new(config.default_level) {
            Ok(level) if !level.is_off() => level,
            _ => {
                warn!(
                    "default speed level {} is unusable, falling back to 3",
                    config.default_level
                );
                SpeedLevel(3)
            }
        };

        Self {
            speed_unit: config.speed_unit,
            default_level,
        }
    }

    pub fn default_level(&self) -> SpeedLevel {
        self.default_level
    }

    /// Out-of-range levels leave the state untouched.
    pub fn set_speed_level(&self, state: &mut FanState, level: u8) {
        match SpeedLevel::new(level) {
            Ok(level) => self.apply_level(state, level),
            Err(err) => debug!("ignoring speed request: {err}"),
        }
    }

    pub fn toggle_power(&self, state: &mut FanState) {
        if state.power_on {
            self.apply_level(state, SpeedLevel::OFF);
        } else {
            self.power_on(state);
        }
    }

    /// No-op when already running.
    pub fn power_on(&self, state: &mut FanState) {
        if state.power_on {
            return;
        }
        let level = if state.speed_level.is_off() {
            self.default_level
        } else {
            state.speed_level
        };
        self.apply_level(state, level);
    }

    pub fn power_off(&self, state: &mut FanState) {
        self.apply_level(state, SpeedLevel::OFF);
    }

    pub fn increment(&self, state: &mut FanState) {
        self.apply_level(state, state.speed_level.saturating_up());
    }

    pub fn decrement(&self, state: &mut FanState) {
        self.apply_level(state, state.speed_level.saturating_down());
    }

    /// Clears the commanded state. Stopping the rotation and dropping particles
    /// is left to the owner of the integrator and the emitter.
    pub fn reset(&self, state: &mut FanState) {
        state.power_on = false;
        state.speed_level = SpeedLevel::OFF;
        state.target_speed = 0.0;
    }

    fn apply_level(&self, state: &mut FanState, level: SpeedLevel) {
        state.speed_level = level;
        // never negative, whatever speed_unit the caller configured
        state.target_speed = (f32::from(level.get()) * self.speed_unit).max(0.0);
        state.power_on = !level.is_off();
    }
}
