use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Continuous stick inputs sampled from the input device.
///
/// Values are roughly in `[-1, 1]` but are not clamped; mouse axes scaled by the
/// configured sensitivity can exceed that range.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Nose-up positive pitch demand.
    pub pitch: f64,
    /// Yaw demand, positive to the right.
    pub yaw: f64,
    /// Roll demand from the roll keys: -1, 0 or +1.
    pub roll: f64,
}

impl ControlInput {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Key roll plus the roll coupled in from yaw. Left unclamped.
    pub fn total_roll(&self, yaw_to_roll_factor: f64) -> f64 {
        self.roll + self.yaw * yaw_to_roll_factor
    }
}
