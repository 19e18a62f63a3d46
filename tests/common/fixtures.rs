use flyer_control::{
    components::{AircraftConfig, StartConfig},
    physics::SimpleRigidBody,
    systems::Light,
    FlightController,
};

/// A light that remembers its last switch state.
#[derive(Debug, Default, Clone)]
pub struct RecordingLight {
    pub active: bool,
    pub switches: usize,
}

impl Light for RecordingLight {
    fn set_active(&mut self, active: bool) {
        self.active = active;
        self.switches += 1;
    }
}

pub type TestController = FlightController<SimpleRigidBody, RecordingLight, Vec<String>>;

/// Tuning used throughout the tests, matching the stock aircraft.
pub fn create_test_aircraft_config() -> AircraftConfig {
    AircraftConfig {
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

pub fn create_test_lights(count: usize) -> Vec<Option<RecordingLight>> {
    (0..count).map(|_| Some(RecordingLight::default())).collect()
}

pub fn create_test_controller(start: StartConfig) -> TestController {
    FlightController::new(
        create_test_aircraft_config(),
        start,
        Some(SimpleRigidBody::default()),
        create_test_lights(4),
        Vec::new(),
    )
}

/// Flags of the light slots, missing slots read as off.
pub fn light_flags(lights: &[Option<RecordingLight>]) -> Vec<bool> {
    lights
        .iter()
        .map(|light| light.as_ref().map(|l| l.active).unwrap_or(false))
        .collect()
}
