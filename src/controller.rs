use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AircraftConfig, AircraftState, ControlInput, LightStage, StartConfig};
use crate::physics::RigidBody;
use crate::systems::{
    apply_flight_dynamics, apply_light_stage, configure_rigid_body, process_frame_commands,
    sample_control_input, InputDevice, Light, LightReport, LogSink, StatusSink,
};

/// Engine-agnostic flight controller for a single aircraft.
///
/// The host drives two independent entry points that never overlap:
/// [`FlightController::on_frame_tick`] once per rendered frame and
/// [`FlightController::on_physics_tick`] once per fixed physics step, before the
/// rigid body is integrated.
pub struct FlightController<B: RigidBody, L: Light, S: StatusSink = LogSink> {
    config: AircraftConfig,
    state: AircraftState,
    controls: ControlInput,
    body: Option<B>,
    lights: Vec<Option<L>>,
    sink: S,
    physics_enabled: bool,
}

impl<B: RigidBody, L: Light, S: StatusSink> FlightController<B, L, S> {
    /// Runs the initialization sequence.
    ///
    /// Without a rigid body the controller still accepts commands, but every physics
    /// tick is a no-op and the engine stays idle. That condition is logged once here.
    /// A config that fails [`AircraftConfig::validate`] is replaced by the defaults.
    pub fn new(
        config: AircraftConfig,
        start: StartConfig,
        body: Option<B>,
        lights: Vec<Option<L>>,
        sink: S,
    ) -> Self {
        let config = config.validated_or_default();
        let physics_enabled = body.is_some();
        if !physics_enabled {
            error!("Rigid body is required! Flight physics disabled");
        }

        let mut controller = Self {
            config,
            state: AircraftState::new(&config),
            controls: ControlInput::default(),
            body,
            lights,
            sink,
            physics_enabled,
        };

        apply_light_stage(
            LightStage::OFF,
            &mut controller.lights,
            &mut controller.sink,
        );

        if let Some(body) = controller.body.as_mut() {
            configure_rigid_body(body, &start);
            controller
                .state
                .set_thrust(start.initial_thrust(&controller.config));
        }

        controller
    }

    /// Samples the device and applies this frame's discrete commands.
    pub fn on_frame_tick<I: InputDevice + ?Sized>(&mut self, dt: f64, input: &I) {
        self.controls = sample_control_input(input, &self.config);
        process_frame_commands(
            &mut self.state,
            &self.config,
            input,
            dt,
            &mut self.lights,
            &mut self.sink,
        );
    }

    /// Submits this step's forces, torques and damping to the rigid body.
    pub fn on_physics_tick(&mut self, _dt: f64) {
        if !self.physics_enabled {
            return;
        }
        let Some(body) = self.body.as_mut() else {
            return;
        };

        apply_flight_dynamics(body, &self.state, &self.config, &self.controls);
        debug!(
            "Physics tick: thrust {:.1}, speed {:.1} m/s, damping {:.2}",
            self.state.thrust(),
            body.linear_velocity().norm(),
            body.linear_damping()
        );
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AircraftState {
        &mut self.state
    }

    /// Control snapshot from the last frame tick.
    pub fn controls(&self) -> &ControlInput {
        &self.controls
    }

    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut B> {
        self.body.as_mut()
    }

    pub fn lights(&self) -> &[Option<L>] {
        &self.lights
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_physics_enabled(&self) -> bool {
        self.physics_enabled
    }

    pub fn telemetry(&self) -> FlightTelemetry {
        FlightTelemetry {
            thrust: self.state.thrust(),
            throttle: self.state.throttle(),
            flap_setting: self.state.flap_setting(),
            gear_down: self.state.gear_down(),
            light_stage: self.state.light_stage().index(),
            lights: LightReport::new(self.state.light_stage()).description(),
            speed: self.body.as_ref().map(|b| b.linear_velocity().norm()),
            linear_damping: self.body.as_ref().map(|b| b.linear_damping()),
        }
    }
}

/// Snapshot of the aircraft for logging and external tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    pub thrust: f64,
    /// Thrust as a fraction of max thrust
    pub throttle: f64,
    pub flap_setting: f64,
    pub gear_down: bool,
    pub light_stage: u8,
    pub lights: String,
    pub speed: Option<f64>,
    pub linear_damping: Option<f64>,
}
