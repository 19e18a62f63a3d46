use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::components::{AircraftConfig, ControlInput};
use crate::resources::InputBindings;

/// Logical controls the pilot can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKey {
    IncreaseThrottle,
    DecreaseThrottle,
    FlapsUp,
    FlapsDown,
    ToggleGear,
    CycleLights,
    RollLeft,
    RollRight,
}

/// Continuous device axes, positive right (X) and up (Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAxis {
    MouseX,
    MouseY,
}

/// Read-only view of the input device for the current frame.
pub trait InputDevice {
    fn is_key_held(&self, key: ControlKey) -> bool;
    /// True only on the frame the key went from released to pressed.
    fn is_key_rising_edge(&self, key: ControlKey) -> bool;
    fn axis(&self, axis: InputAxis) -> f64;
}

/// Samples the device into a control snapshot.
///
/// Mouse Y is inverted into pitch; roll-left wins when both roll keys are held.
pub fn sample_control_input<I: InputDevice + ?Sized>(
    device: &I,
    config: &AircraftConfig,
) -> ControlInput {
    let pitch = -device.axis(InputAxis::MouseY) * config.mouse_sensitivity;
    let yaw = device.axis(InputAxis::MouseX) * config.mouse_sensitivity;
    let roll = if device.is_key_held(ControlKey::RollLeft) {
        -1.0
    } else if device.is_key_held(ControlKey::RollRight) {
        1.0
    } else {
        0.0
    };

    ControlInput { pitch, yaw, roll }
}

/// Bevy keyboard and mouse state mapped through the configured bindings.
pub struct KeyboardMouseInput<'a> {
    keyboard: &'a ButtonInput<KeyCode>,
    mouse_delta: Vec2,
    bindings: &'a InputBindings,
}

impl<'a> KeyboardMouseInput<'a> {
    /// `mouse_delta` is the accumulated motion this frame in screen pixels (Y down).
    pub fn new(
        keyboard: &'a ButtonInput<KeyCode>,
        mouse_delta: Vec2,
        bindings: &'a InputBindings,
    ) -> Self {
        Self {
            keyboard,
            mouse_delta,
            bindings,
        }
    }
}

impl InputDevice for KeyboardMouseInput<'_> {
    fn is_key_held(&self, key: ControlKey) -> bool {
        self.keyboard.pressed(self.bindings.key(key))
    }

    fn is_key_rising_edge(&self, key: ControlKey) -> bool {
        self.keyboard.just_pressed(self.bindings.key(key))
    }

    fn axis(&self, axis: InputAxis) -> f64 {
        let raw = match axis {
            InputAxis::MouseX => self.mouse_delta.x,
            // Screen space grows downwards, the axis is positive upwards.
            InputAxis::MouseY => -self.mouse_delta.y,
        };
        raw as f64 * self.bindings.mouse_axis_scale
    }
}

/// Deterministic input device driven by a script or a test.
///
/// Rising edges are computed against the key state of the previous frame, which is
/// latched by [`ScriptedInput::end_frame`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    held: HashSet<ControlKey>,
    previous: HashSet<ControlKey>,
    axes: HashMap<InputAxis, f64>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: ControlKey) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: ControlKey) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn set_axis(&mut self, axis: InputAxis, value: f64) {
        self.axes.insert(axis, value);
    }

    /// Latches the current key state so the next frame sees no new edges for held keys.
    pub fn end_frame(&mut self) {
        self.previous = self.held.clone();
    }
}

impl InputDevice for ScriptedInput {
    fn is_key_held(&self, key: ControlKey) -> bool {
        self.held.contains(&key)
    }

    fn is_key_rising_edge(&self, key: ControlKey) -> bool {
        self.held.contains(&key) && !self.previous.contains(&key)
    }

    fn axis(&self, axis: InputAxis) -> f64 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }
}
