use bevy::prelude::*;
use std::path::Path;

use crate::components::ConfigError;
use crate::plugins::FlightStatusEvent;
use crate::resources::FlightControlConfig;
use crate::systems::{
    flight_dynamics_system, frame_tick_system, report_missing_rigid_bodies,
    rigid_body_integration_system, spawn_player_aircraft,
};

/// Fixed-step flight stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Per rendered frame: stick sampling and discrete commands.
    Input,
    Dynamics,
    Integration,
}

pub struct FlightControlPlugin {
    pub config: FlightControlConfig,
    pub spawn_player: bool,
}

impl Default for FlightControlPlugin {
    fn default() -> Self {
        Self::new(FlightControlConfig::default())
    }
}

impl FlightControlPlugin {
    pub fn new(config: FlightControlConfig) -> Self {
        Self {
            config,
            spawn_player: true,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::new(FlightControlConfig::load(path)?))
    }

    /// For hosts that spawn their own aircraft entities.
    pub fn without_player_spawn(mut self) -> Self {
        self.spawn_player = false;
        self
    }
}

impl Plugin for FlightControlPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.config.bindings.clone())
            .insert_resource(self.config.physics.clone())
            .add_event::<FlightStatusEvent>()
            .init_resource::<ButtonInput<KeyCode>>();

        app.insert_resource(Time::<Fixed>::from_seconds(self.config.physics.timestep));

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Dynamics, FlightSet::Integration).chain(),
        );

        if self.spawn_player {
            app.add_systems(Startup, spawn_player_aircraft);
        }

        app.add_systems(Update, frame_tick_system.in_set(FlightSet::Input))
            .add_systems(PostUpdate, report_missing_rigid_bodies)
            .add_systems(
                FixedUpdate,
                (
                    flight_dynamics_system.in_set(FlightSet::Dynamics),
                    rigid_body_integration_system.in_set(FlightSet::Integration),
                ),
            );
    }
}
