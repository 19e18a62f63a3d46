pub mod config;
pub mod state;

pub use config::{AircraftConfig, ConfigError, StartConfig};
pub use state::AircraftState;
