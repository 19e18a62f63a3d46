use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::AircraftConfig;
use crate::components::LightStage;

/// Discrete and throttle state of the player aircraft.
///
/// Every setter clamps or wraps its input so the invariants hold after any write:
/// thrust stays in `[0, max_thrust]`, flaps in `[0, 1]` and the light stage in
/// `0..=MAX_LIGHT_STAGE`. Nothing here ever fails.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    current_thrust: f64,
    max_thrust: f64,
    flap_setting: f64,
    gear_down: bool,
    light_stage: LightStage,
}

impl AircraftState {
    /// Engine idle, flaps up, gear down and lights off. The airborne start thrust is
    /// applied by whoever attaches the rigid body.
    pub fn new(config: &AircraftConfig) -> Self {
        Self {
            current_thrust: 0.0,
            max_thrust: config.max_thrust,
            flap_setting: 0.0,
            gear_down: true,
            light_stage: LightStage::OFF,
        }
    }

    pub fn thrust(&self) -> f64 {
        self.current_thrust
    }

    pub fn max_thrust(&self) -> f64 {
        self.max_thrust
    }

    /// Sets thrust, clamped to `[0, max_thrust]`. NaN is treated as zero.
    pub fn set_thrust(&mut self, thrust: f64) {
        self.current_thrust = if thrust.is_nan() {
            0.0
        } else {
            // A NaN or negative limit collapses the range to zero.
            thrust.clamp(0.0, self.max_thrust.max(0.0))
        };
    }

    /// Fraction of full thrust in `[0, 1]`.
    pub fn throttle(&self) -> f64 {
        if self.max_thrust > 0.0 {
            self.current_thrust / self.max_thrust
        } else {
            0.0
        }
    }

    pub fn flap_setting(&self) -> f64 {
        self.flap_setting
    }

    pub fn set_flap_setting(&mut self, setting: f64) {
        self.flap_setting = if setting.is_nan() {
            0.0
        } else {
            setting.clamp(0.0, 1.0)
        };
    }

    pub fn flaps_extended(&self) -> bool {
        self.flap_setting > 0.0
    }

    pub fn gear_down(&self) -> bool {
        self.gear_down
    }

    pub fn set_gear_down(&mut self, down: bool) {
        self.gear_down = down;
    }

    /// Flips the gear and returns the new position (`true` = down).
    pub fn toggle_gear(&mut self) -> bool {
        self.gear_down = !self.gear_down;
        self.gear_down
    }

    pub fn light_stage(&self) -> LightStage {
        self.light_stage
    }

    /// Sets the light stage from a raw index, wrapping it into range.
    pub fn set_light_stage(&mut self, stage: u32) {
        self.light_stage = LightStage::new(stage);
    }
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::new(&AircraftConfig::default())
    }
}
