use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{input::InputBindings, physics::PhysicsConfig};
use crate::components::aircraft::config::{load_yaml, save_yaml};
use crate::components::{AircraftConfig, ConfigError, StartConfig};

/// Everything needed to spawn and fly the player aircraft.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightControlConfig {
    pub aircraft: AircraftConfig,
    pub start: StartConfig,
    pub bindings: InputBindings,
    pub physics: PhysicsConfig,
}

impl FlightControlConfig {
    /// Loads a YAML config file and validates the aircraft parameters.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_yaml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_yaml(self, path)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.aircraft.validate()?;
        if !(self.physics.timestep.is_finite() && self.physics.timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "physics timestep must be a positive number, got {}",
                self.physics.timestep
            )));
        }
        Ok(())
    }
}
