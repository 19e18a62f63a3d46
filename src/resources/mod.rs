pub mod config;

pub use config::{FlightControlConfig, InputBindings, PhysicsConfig};
