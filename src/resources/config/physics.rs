use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::physics::body::GRAVITY;

/// Fixed-step settings for the physics schedule.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Fixed physics timestep [s]
    pub timestep: f64,
    /// Gravity magnitude along world -Y [m/s^2]
    pub gravity: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0, // 120 Hz default physics rate
            gravity: GRAVITY,
        }
    }
}
