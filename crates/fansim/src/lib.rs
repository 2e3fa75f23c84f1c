pub mod airflow;
pub mod config;
pub mod controller;
pub mod motion;
pub mod prelude;
pub mod simulation;
pub mod state;

pub use config::{get_config, reload_config};
