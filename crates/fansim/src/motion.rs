use crate::config::MotionConfig;
use crate::state::FanState;

pub const FULL_TURN: f32 = 360.0;

/// Moves the actual rotation speed toward the target speed with bounded
/// acceleration, and integrates the rotation angle.
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    accel_rate: f32,
    decel_rate: f32,
    off_decel_rate: f32,
}

impl MotionIntegrator {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            accel_rate: config.accel_rate,
            decel_rate: config.decel_rate,
            off_decel_rate: config.decel_rate * config.off_decel_multiplier,
        }
    }

    pub fn accel_rate(&self) -> f32 {
        self.accel_rate
    }

    pub fn decel_rate(&self) -> f32 {
        self.decel_rate
    }

    /// Deceleration used while coasting down with the power off.
    pub fn off_decel_rate(&self) -> f32 {
        self.off_decel_rate
    }

    /// Largest change of `current_speed` a single tick can produce.
    pub fn max_step(&self) -> f32 {
        self.accel_rate.max(self.decel_rate).max(self.off_decel_rate)
    }

    pub fn tick(&self, state: &mut FanState) {
        if state.power_on {
            if state.current_speed < state.target_speed {
                state.current_speed = (state.current_speed + self.accel_rate)
                    .min(state.target_speed)
                    .max(0.0);
            } else if state.current_speed > state.target_speed {
                state.current_speed = (state.current_speed - self.decel_rate)
                    .max(state.target_speed)
                    .max(0.0);
            }
        } else if state.current_speed > 0.0 {
            state.current_speed = (state.current_speed - self.off_decel_rate).max(0.0);
        }

        if state.power_on || state.current_speed > 0.0 {
            state.rotation_angle = wrap_degrees(state.rotation_angle + state.current_speed);
        }
    }

    /// Drops the rotation speed to zero without coasting.
    pub fn stop(&self, state: &mut FanState) {
        state.current_speed = 0.0;
    }
}

/// Wraps a non-negative heading into `[0, 360)`.
///
/// Per-tick speeds are far below a full turn, so a single subtraction covers
/// every normal step; the remainder handles anything larger.
pub fn wrap_degrees(angle: f32) -> f32 {
    if angle < FULL_TURN {
        return angle.max(0.0);
    }
    let wrapped = angle - FULL_TURN;
    if wrapped < FULL_TURN {
        wrapped
    } else {
        angle % FULL_TURN
    }
}
