use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;

/// Tuning parameters for the player flight controller.
///
/// All values are set once when the aircraft is created and never change afterwards.
/// Thrust and rates are expressed as accelerations since the controller drives the
/// rigid body in acceleration mode (mass independent).
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    /// Thrust acceleration at full throttle [m/s^2].
    pub max_thrust: f64,
    /// Throttle ramp rate while a throttle key is held [thrust units / s].
    pub throttle_increment: f64,
    /// Roll torque gain [rad/s^2 per unit input].
    pub roll_speed: f64,
    /// Pitch torque gain [rad/s^2 per unit input].
    pub pitch_speed: f64,
    /// Yaw torque gain [rad/s^2 per unit input].
    pub yaw_speed: f64,
    /// Scale applied to the raw mouse axes.
    pub mouse_sensitivity: f64,
    /// Amount of roll coupled in from yaw input.
    pub yaw_to_roll_factor: f64,
    /// Linear speed limit [m/s].
    pub max_speed: f64,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            max_thrust: 1000.0,
            throttle_increment: 50.0,
            roll_speed: 5.0,
            pitch_speed: 5.0,
            yaw_speed: 2.0,
            mouse_sensitivity: 0.5,
            yaw_to_roll_factor: 0.5,
            max_speed: 500.0,
        }
    }
}

impl AircraftConfig {
    /// Checks every parameter is finite and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let parameters = [
            ("max_thrust", self.max_thrust),
            ("throttle_increment", self.throttle_increment),
            ("roll_speed", self.roll_speed),
            ("pitch_speed", self.pitch_speed),
            ("yaw_speed", self.yaw_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("yaw_to_roll_factor", self.yaw_to_roll_factor),
            ("max_speed", self.max_speed),
        ];

        for (name, value) in parameters {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// This config if it validates, otherwise the defaults. A rejection is logged.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                error!("Invalid aircraft config, falling back to defaults: {}", err);
                Self::default()
            }
        }
    }
}
