use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

pub const CONFIG_FILE: &str = "fansim_config.toml";

static CONFIG: OnceLock<Mutex<FanSimConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading it from `fansim_config.toml`
/// on first use. A missing or broken file falls back to the built-in defaults.
pub fn get_config() -> FanSimConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(FanSimConfig::load_or_default(CONFIG_FILE)));
    match config_mutex.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Re-read `fansim_config.toml` and replace the cached configuration.
/// The cache is left untouched when the file cannot be loaded.
pub fn reload_config() -> Result<(), ConfigError> {
    reload_config_from_file(CONFIG_FILE)
}

fn reload_config_from_file(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let new_config = FanSimConfig::load_from_file(path)?;
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    match config_mutex.lock() {
        Ok(mut config) => *config = new_config,
        Err(poisoned) => *poisoned.into_inner() = new_config,
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanSimConfig {
    pub motion: MotionConfig,
    pub airflow: AirflowConfig,
    pub clock: ClockConfig,
}

/// Rotation speeds are in degrees per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Target speed contributed by each speed level.
    pub speed_unit: f32,
    pub accel_rate: f32,
    pub decel_rate: f32,
    /// Coasting down with the power off uses `decel_rate * off_decel_multiplier`.
    pub off_decel_multiplier: f32,
    /// Level selected when powering on from level 0.
    pub default_level: u8,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed_unit: 2.0,
            accel_rate: 0.25,
            decel_rate: 0.15,
            off_decel_multiplier: 1.5,
            default_level: 3,
        }
    }
}

/// Distances are in scene units, measured from the hub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirflowConfig {
    pub cap: usize,
    /// Each tick a jet particle spawns when `random(0..spawn_trials) < speed_level`.
    pub spawn_trials: u32,
    /// Jet particles spawn within +/- this many degrees of the emission heading.
    pub spawn_half_arc_degrees: f32,
    pub spawn_min_distance: f32,
    pub spawn_max_distance: f32,
    /// Distance at which particles start fading out.
    pub min_radius: f32,
    /// Particles beyond this distance are retired.
    pub max_radius: f32,
    pub base_speed: f32,
    pub speed_gain: f32,
    pub ambient: AmbientSpawnConfig,
}

impl Default for AirflowConfig {
    fn default() -> Self {
        Self {
            cap: 30,
            spawn_trials: 10,
            spawn_half_arc_degrees: 30.0,
            spawn_min_distance: 80.0,
            spawn_max_distance: 100.0,
            min_radius: 80.0,
            max_radius: 200.0,
            base_speed: 1.5,
            speed_gain: 0.3,
            ambient: AmbientSpawnConfig::default(),
        }
    }
}

/// Slow omnidirectional trickle of particles around the blade tips,
/// independent of the speed level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientSpawnConfig {
    pub enabled: bool,
    pub cap: usize,
    /// A particle spawns with probability `1 / one_in` per tick.
    pub one_in: u32,
    pub distance: f32,
}

impl Default for AmbientSpawnConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cap: 25,
            one_in: 15,
            distance: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_hz: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { tick_hz: 60.0 }
    }
}

impl FanSimConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: FanSimConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Loaded fan simulation config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{err}; using default fan simulation config");
                Self::default()
            }
        }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let motion = &self.motion;
        let airflow = &self.airflow;

        let floats = [
            motion.speed_unit,
            motion.accel_rate,
            motion.decel_rate,
            motion.off_decel_multiplier,
            airflow.spawn_half_arc_degrees,
            airflow.spawn_min_distance,
            airflow.spawn_max_distance,
            airflow.min_radius,
            airflow.max_radius,
            airflow.base_speed,
            airflow.speed_gain,
            airflow.ambient.distance,
        ];
        if !floats.iter().all(|value| value.is_finite()) || !self.clock.tick_hz.is_finite() {
            return invalid("all rates, distances and speeds must be finite");
        }

        if !(motion.speed_unit > 0.0) {
            return invalid("motion.speed_unit must be positive");
        }
        if !(motion.accel_rate > 0.0) || !(motion.decel_rate > 0.0) {
            return invalid("motion.accel_rate and motion.decel_rate must be positive");
        }
        if motion.accel_rate == motion.decel_rate {
            return invalid("motion.accel_rate and motion.decel_rate must differ");
        }
        if !(motion.off_decel_multiplier >= 1.0) {
            return invalid("motion.off_decel_multiplier must be at least 1.0");
        }
        if !(1..=crate::state::MAX_SPEED_LEVEL).contains(&motion.default_level) {
            return invalid("motion.default_level must be within 1..=5");
        }

        if airflow.cap == 0 {
            return invalid("airflow.cap must be positive");
        }
        if airflow.spawn_trials == 0 {
            return invalid("airflow.spawn_trials must be positive");
        }
        if !(airflow.spawn_half_arc_degrees > 0.0) {
            return invalid("airflow.spawn_half_arc_degrees must be positive");
        }
        if !(airflow.spawn_min_distance >= 0.0)
            || !(airflow.spawn_max_distance > airflow.spawn_min_distance)
        {
            return invalid("airflow spawn band must satisfy 0 <= min < max");
        }
        if !(airflow.max_radius > airflow.min_radius) {
            return invalid("airflow.max_radius must exceed airflow.min_radius");
        }
        if !(airflow.base_speed > 0.0) || !(airflow.speed_gain >= 0.0) {
            return invalid("airflow.base_speed must be positive and speed_gain non-negative");
        }
        if airflow.ambient.enabled && (airflow.ambient.cap == 0 || airflow.ambient.one_in == 0) {
            return invalid("airflow.ambient.cap and airflow.ambient.one_in must be positive");
        }

        if !(self.clock.tick_hz > 0.0) {
            return invalid("clock.tick_hz must be positive");
        }
        Ok(())
    }
}

fn invalid(message: &str) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FanSimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FanSimConfig = toml::from_str(
            r#"
            [motion]
            accel_rate = 0.5

            [airflow.ambient]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.motion.accel_rate, 0.5);
        assert_eq!(config.motion.decel_rate, 0.15);
        assert!(!config.airflow.ambient.enabled);
        assert_eq!(config.airflow.cap, 30);
        assert_eq!(config.clock.tick_hz, 60.0);
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let config = FanSimConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: FanSimConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[rstest]
    #[case::zero_accel(|c: &mut FanSimConfig| c.motion.accel_rate = 0.0)]
    #[case::equal_rates(|c: &mut FanSimConfig| c.motion.decel_rate = c.motion.accel_rate)]
    #[case::default_level_zero(|c: &mut FanSimConfig| c.motion.default_level = 0)]
    #[case::default_level_six(|c: &mut FanSimConfig| c.motion.default_level = 6)]
    #[case::zero_cap(|c: &mut FanSimConfig| c.airflow.cap = 0)]
    #[case::inverted_radii(|c: &mut FanSimConfig| c.airflow.max_radius = c.airflow.min_radius)]
    #[case::empty_spawn_band(|c: &mut FanSimConfig| c.airflow.spawn_max_distance = c.airflow.spawn_min_distance)]
    #[case::nan_speed_unit(|c: &mut FanSimConfig| c.motion.speed_unit = f32::NAN)]
    #[case::zero_tick_rate(|c: &mut FanSimConfig| c.clock.tick_hz = 0.0)]
    #[case::infinite_arc(|c: &mut FanSimConfig| c.airflow.spawn_half_arc_degrees = f32::INFINITY)]
    #[case::infinite_spawn_band(|c: &mut FanSimConfig| c.airflow.spawn_max_distance = f32::INFINITY)]
    #[case::infinite_max_radius(|c: &mut FanSimConfig| c.airflow.max_radius = f32::INFINITY)]
    #[case::infinite_accel(|c: &mut FanSimConfig| c.motion.accel_rate = f32::INFINITY)]
    #[case::infinite_ambient_distance(|c: &mut FanSimConfig| c.airflow.ambient.distance = f32::INFINITY)]
    #[case::infinite_tick_rate(|c: &mut FanSimConfig| c.clock.tick_hz = f64::INFINITY)]
    fn test_invalid_configs_are_rejected(#[case] mutate: fn(&mut FanSimConfig)) {
        let mut config = FanSimConfig::default();
        mutate(&mut config);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_infinite_value_in_toml_is_rejected() {
        let config: FanSimConfig = toml::from_str("[airflow]\nspawn_half_arc_degrees = inf").unwrap();
        assert!(config.airflow.spawn_half_arc_degrees.is_infinite());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = FanSimConfig::load_or_default("definitely/not/here/fansim_config.toml");
        assert_eq!(config, FanSimConfig::default());
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let err = FanSimConfig::load_from_file("definitely/not/here/fansim_config.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("fansim_config_{}.toml", std::process::id()));
        let mut config = FanSimConfig::default();
        config.airflow.cap = 12;
        config.save_to_file(&path).unwrap();

        let loaded = FanSimConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.airflow.cap, 12);
    }

    #[test]
    fn test_reload_replaces_cache_only_on_success() {
        let path = std::env::temp_dir().join(format!("fansim_reload_{}.toml", std::process::id()));
        let mut config = FanSimConfig::default();
        config.clock.tick_hz = 30.0;
        config.save_to_file(&path).unwrap();

        reload_config_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(get_config().clock.tick_hz, 30.0);

        assert!(reload_config_from_file("definitely/not/here/fansim_config.toml").is_err());
        assert_eq!(get_config().clock.tick_hz, 30.0);
    }
}
