use bevy::prelude::*;

/// Marks the aircraft driven by the local keyboard and mouse.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub input_enabled: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            input_enabled: true,
        }
    }

    /// A player aircraft that ignores device input until enabled.
    pub fn detached() -> Self {
        Self {
            input_enabled: false,
        }
    }

    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    pub fn accepts_input(&self) -> bool {
        self.input_enabled
    }
}
