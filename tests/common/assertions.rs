use approx::assert_relative_eq;
use flyer_control::components::{AircraftConfig, AircraftState, MAX_LIGHT_STAGE};
use nalgebra::Vector3;

/// Assert that the aircraft state respects its ranges
#[track_caller]
pub fn assert_state_valid(state: &AircraftState, config: &AircraftConfig) {
    assert!(
        state.thrust() >= 0.0 && state.thrust() <= config.max_thrust,
        "Thrust {} out of range [0, {}]",
        state.thrust(),
        config.max_thrust
    );
    assert!(
        (0.0..=1.0).contains(&state.flap_setting()),
        "Flap setting {} out of range",
        state.flap_setting()
    );
    assert!(
        state.light_stage().index() <= MAX_LIGHT_STAGE,
        "Light stage {} out of range",
        state.light_stage().index()
    );
}

#[track_caller]
pub fn assert_same_direction(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.normalize(), expected.normalize(), epsilon = epsilon);
}
