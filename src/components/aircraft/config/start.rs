use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::AircraftConfig;

/// How the aircraft is set up when it is spawned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Start airborne: gravity is disabled and the engine is already spooled up.
    pub start_flying_in_air: bool,
}

impl StartConfig {
    /// Start on the ground with gravity enabled and zero thrust.
    pub fn grounded() -> Self {
        Self {
            start_flying_in_air: false,
        }
    }

    /// Start in the air with gravity disabled.
    pub fn airborne() -> Self {
        Self {
            start_flying_in_air: true,
        }
    }

    /// Thrust the aircraft starts with, two throttle increments when airborne.
    pub fn initial_thrust(&self, config: &AircraftConfig) -> f64 {
        if self.start_flying_in_air {
            config.throttle_increment * 2.0
        } else {
            0.0
        }
    }

    pub fn gravity_enabled(&self) -> bool {
        !self.start_flying_in_air
    }
}
