use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest light stage; stages run `0..=MAX_LIGHT_STAGE` and wrap back to 0.
pub const MAX_LIGHT_STAGE: u8 = 4;

/// Canonical exterior light roles, in switch-on order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightRole {
    Beacon,
    Display,
    Taxi,
    Landing,
}

impl LightRole {
    pub const ALL: [LightRole; 4] = [
        LightRole::Beacon,
        LightRole::Display,
        LightRole::Taxi,
        LightRole::Landing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LightRole::Beacon => "Beacon",
            LightRole::Display => "Display",
            LightRole::Taxi => "Taxi",
            LightRole::Landing => "Landing",
        }
    }

    /// Position of the role in the switch-on order.
    pub fn ordinal(&self) -> usize {
        match self {
            LightRole::Beacon => 0,
            LightRole::Display => 1,
            LightRole::Taxi => 2,
            LightRole::Landing => 3,
        }
    }
}

impl fmt::Display for LightRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cyclic light switch position. Stage `N` turns on the first `N` lights.
///
/// The value is always in `0..=MAX_LIGHT_STAGE`; out-of-range input wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct LightStage(u8);

impl LightStage {
    pub const OFF: LightStage = LightStage(0);
    pub const ALL_ON: LightStage = LightStage(MAX_LIGHT_STAGE);

    pub fn new(stage: u32) -> Self {
        Self((stage % (MAX_LIGHT_STAGE as u32 + 1)) as u8)
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    /// Next switch position, wrapping from all-on back to off.
    pub fn advance(&self) -> Self {
        Self::new(self.0 as u32 + 1)
    }

    pub fn is_off(&self) -> bool {
        self.0 == 0
    }

    /// Whether the light at `index` in the aircraft's light list is lit at this stage.
    pub fn is_light_active(&self, index: usize) -> bool {
        index < self.0 as usize
    }

    pub fn assignment(&self) -> LightAssignment {
        LightAssignment {
            roles: LightRole::ALL.map(|role| (role, self.is_light_active(role.ordinal()))),
        }
    }
}

impl From<u8> for LightStage {
    fn from(stage: u8) -> Self {
        Self::new(stage as u32)
    }
}

impl From<LightStage> for u8 {
    fn from(stage: LightStage) -> Self {
        stage.0
    }
}

/// Active flag for each canonical light role at a given stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightAssignment {
    roles: [(LightRole, bool); 4],
}

impl LightAssignment {
    pub fn roles(&self) -> &[(LightRole, bool)] {
        &self.roles
    }

    pub fn is_active(&self, role: LightRole) -> bool {
        self.roles[role.ordinal()].1
    }

    pub fn active_roles(&self) -> impl Iterator<Item = LightRole> + '_ {
        self.roles
            .iter()
            .filter(|(_, active)| *active)
            .map(|(role, _)| *role)
    }

    /// "all off", or the active role names joined with commas.
    pub fn description(&self) -> String {
        let names: Vec<&str> = self.active_roles().map(|role| role.name()).collect();
        if names.is_empty() {
            "all off".to_string()
        } else {
            names.join(", ")
        }
    }
}

/// Ordered light entities belonging to an aircraft. Index `i` follows `LightRole::ALL`.
#[derive(Component, Debug, Clone, Default)]
pub struct AircraftLights(pub Vec<Entity>);
