pub use crate::airflow::{AirflowEmitter, Particle, ParticleView};
pub use crate::config::{
    AirflowConfig, AmbientSpawnConfig, ClockConfig, ConfigError, FanSimConfig, MotionConfig,
};
pub use crate::controller::SpeedController;
pub use crate::motion::MotionIntegrator;
pub use crate::simulation::{FanCommand, FanSimulation};
pub use crate::state::{FanPhase, FanState, SpeedLevel, SpeedLevelError};
