use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::systems::ControlKey;

/// Keyboard bindings and mouse scaling for the player aircraft.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    pub increase_throttle: KeyCode,
    pub decrease_throttle: KeyCode,
    pub flaps_up: KeyCode,
    pub flaps_down: KeyCode,
    pub toggle_gear: KeyCode,
    pub cycle_lights: KeyCode,
    pub roll_left: KeyCode,
    pub roll_right: KeyCode,
    /// Converts accumulated mouse motion (pixels per frame) into axis units.
    pub mouse_axis_scale: f64,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            increase_throttle: KeyCode::KeyW,
            decrease_throttle: KeyCode::KeyS,
            flaps_up: KeyCode::KeyF,
            flaps_down: KeyCode::KeyR,
            toggle_gear: KeyCode::KeyG,
            cycle_lights: KeyCode::KeyL,
            roll_left: KeyCode::KeyA,
            roll_right: KeyCode::KeyD,
            mouse_axis_scale: 0.1,
        }
    }
}

impl InputBindings {
    pub fn key(&self, control: ControlKey) -> KeyCode {
        match control {
            ControlKey::IncreaseThrottle => self.increase_throttle,
            ControlKey::DecreaseThrottle => self.decrease_throttle,
            ControlKey::FlapsUp => self.flaps_up,
            ControlKey::FlapsDown => self.flaps_down,
            ControlKey::ToggleGear => self.toggle_gear,
            ControlKey::CycleLights => self.cycle_lights,
            ControlKey::RollLeft => self.roll_left,
            ControlKey::RollRight => self.roll_right,
        }
    }
}
