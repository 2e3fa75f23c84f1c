use std::fmt;
use thiserror::Error;

pub const MAX_SPEED_LEVEL: u8 = 5;

/// Discrete user-facing speed setting, always within `0..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(pub(crate) u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("speed level {0} is outside 0..=5")]
pub struct SpeedLevelError(pub u8);

impl SpeedLevel {
    pub const OFF: Self = Self(0);
    pub const MAX: Self = Self(MAX_SPEED_LEVEL);

    pub fn new(level: u8) -> Result<Self, SpeedLevelError> {
        if level <= MAX_SPEED_LEVEL {
            Ok(Self(level))
        } else {
            Err(SpeedLevelError(level))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    pub fn saturating_up(self) -> Self {
        Self((self.0 + 1).min(MAX_SPEED_LEVEL))
    }

    pub fn saturating_down(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = SpeedLevelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse motion phase derived from [`FanState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanPhase {
    Off,
    SpinningUp,
    AtSpeed,
    SpinningDown,
}

impl fmt::Display for FanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FanPhase::Off => "OFF",
            FanPhase::SpinningUp => "SPINNING UP",
            FanPhase::AtSpeed => "AT SPEED",
            FanPhase::SpinningDown => "SPINNING DOWN",
        };
        f.write_str(label)
    }
}

/// Commanded and integrated state of one fan.
///
/// `speed_level` and `power_on` are written only by the speed controller,
/// `current_speed` and `rotation_angle` only by the motion integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FanState {
    pub(crate) power_on: bool,
    pub(crate) speed_level: SpeedLevel,
    pub(crate) target_speed: f32,
    pub(crate) current_speed: f32,
    pub(crate) rotation_angle: f32,
}

impl FanState {
    pub fn power_on(&self) -> bool {
        self.power_on
    }

    pub fn speed_level(&self) -> SpeedLevel {
        self.speed_level
    }

    /// Degrees per tick the rotation is being driven toward.
    pub fn target_speed(&self) -> f32 {
        self.target_speed
    }

    /// Degrees per tick.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Heading of the blade assembly in degrees, within `[0, 360)`.
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn phase(&self) -> FanPhase {
        if !self.power_on {
            return if self.current_speed > 0.0 {
                FanPhase::SpinningDown
            } else {
                FanPhase::Off
            };
        }

        if self.current_speed < self.target_speed {
            FanPhase::SpinningUp
        } else if self.current_speed > self.target_speed {
            FanPhase::SpinningDown
        } else {
            FanPhase::AtSpeed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(5)]
    fn test_speed_level_accepts_valid(#[case] level: u8) {
        assert_eq!(SpeedLevel::new(level).unwrap().get(), level);
    }

    #[rstest]
    #[case(6)]
    #[case(42)]
    #[case(u8::MAX)]
    fn test_speed_level_rejects_out_of_range(#[case] level: u8) {
        assert_eq!(SpeedLevel::try_from(level), Err(SpeedLevelError(level)));
    }

    #[test]
    fn test_speed_level_saturates() {
        assert_eq!(SpeedLevel::MAX.saturating_up(), SpeedLevel::MAX);
        assert_eq!(SpeedLevel::OFF.saturating_down(), SpeedLevel::OFF);
        assert_eq!(SpeedLevel::OFF.saturating_up().get(), 1);
    }

    #[test]
    fn test_speed_level_error_message() {
        assert_eq!(SpeedLevelError(9).to_string(), "speed level 9 is outside 0..=5");
    }

    #[rstest]
    #[case(false, 0.0, 0.0, FanPhase::Off)]
    #[case(false, 0.0, 3.0, FanPhase::SpinningDown)]
    #[case(true, 6.0, 2.0, FanPhase::SpinningUp)]
    #[case(true, 6.0, 6.0, FanPhase::AtSpeed)]
    #[case(true, 2.0, 6.0, FanPhase::SpinningDown)]
    fn test_phase(
        #[case] power_on: bool,
        #[case] target_speed: f32,
        #[case] current_speed: f32,
        #[case] expected: FanPhase,
    ) {
        let state = FanState {
            power_on,
            target_speed,
            current_speed,
            ..FanState::default()
        };
        assert_eq!(state.phase(), expected);
    }

    #[test]
    fn test_default_state_is_at_rest() {
        let state = FanState::default();
        assert!(!state.power_on());
        assert_eq!(state.speed_level(), SpeedLevel::OFF);
        assert_eq!(state.current_speed(), 0.0);
        assert_eq!(state.rotation_angle(), 0.0);
        assert_eq!(state.phase(), FanPhase::Off);
    }
}
