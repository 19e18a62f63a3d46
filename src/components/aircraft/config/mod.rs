mod aircraft;
mod loader;
mod start;

pub use aircraft::AircraftConfig;
pub use loader::{load_yaml, save_yaml, ConfigError};
pub use start::StartConfig;
