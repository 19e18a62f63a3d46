use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftConfig, AircraftState, ControlInput, StartConfig};
use crate::physics::{CollisionDetectionMode, ForceMode, RigidBody};

/// Linear damping with flaps up and gear retracted.
pub const BASE_LINEAR_DAMPING: f64 = 0.1;
/// Extra linear damping at full flap.
pub const FLAP_DRAG: f64 = 0.1;
/// Extra linear damping with the gear down.
pub const GEAR_DRAG: f64 = 0.4;
/// Induced lift per unit flap per (m/s)^2.
pub const FLAP_LIFT_FACTOR: f64 = 0.01;
pub const ANGULAR_DAMPING: f64 = 0.5;

/// Prepares a freshly attached rigid body for flight.
pub fn configure_rigid_body<B: RigidBody + ?Sized>(body: &mut B, start: &StartConfig) {
    body.set_collision_detection(CollisionDetectionMode::Continuous);
    body.set_use_gravity(start.gravity_enabled());
    body.set_linear_damping(BASE_LINEAR_DAMPING);
    body.set_angular_damping(ANGULAR_DAMPING);
    body.set_sleep_threshold(0.0);
}

/// Absolute linear damping for the current flap and gear configuration.
pub fn linear_damping(state: &AircraftState) -> f64 {
    let gear_drag = if state.gear_down() { GEAR_DRAG } else { 0.0 };
    // Summing the configuration drag first keeps 0.1 + 0.1 + 0.4 at exactly 0.6.
    BASE_LINEAR_DAMPING + (state.flap_setting() * FLAP_DRAG + gear_drag)
}

/// Body-frame control torque: x roll, y yaw, z pitch (nose up for positive pitch).
pub fn control_torque(controls: &ControlInput, config: &AircraftConfig) -> Vector3<f64> {
    Vector3::new(
        controls.total_roll(config.yaw_to_roll_factor) * config.roll_speed,
        controls.yaw * config.yaw_speed,
        -controls.pitch * config.pitch_speed,
    )
}

/// Rescales the body's velocity to `max_speed` if it is faster. Returns whether it clamped.
pub fn clamp_speed<B: RigidBody + ?Sized>(body: &mut B, max_speed: f64) -> bool {
    let velocity = body.linear_velocity();
    let speed = velocity.norm();
    if speed > max_speed {
        body.set_linear_velocity(velocity * (max_speed / speed));
        true
    } else {
        false
    }
}

/// Flap-induced lift along the body up axis, quadratic in speed.
///
/// Only produced while flaps are extended and the body is under gravity.
pub fn flap_lift<B: RigidBody + ?Sized>(body: &B, state: &AircraftState) -> Option<Vector3<f64>> {
    if !state.flaps_extended() || !body.use_gravity() {
        return None;
    }
    let speed_squared = body.linear_velocity().norm_squared();
    Some(body.up() * (state.flap_setting() * speed_squared * FLAP_LIFT_FACTOR))
}

/// One fixed physics step of the flight model.
///
/// In order: thrust along the body lateral axis, speed clamp against the solver's
/// velocity, control torque, absolute damping update, then flap lift. Everything is
/// submitted in acceleration mode.
pub fn apply_flight_dynamics<B: RigidBody + ?Sized>(
    body: &mut B,
    state: &AircraftState,
    config: &AircraftConfig,
    controls: &ControlInput,
) {
    let thrust = body.right() * state.thrust();
    body.apply_force(thrust, ForceMode::Acceleration);

    if clamp_speed(body, config.max_speed) {
        debug!("Speed clamped to {:.1} m/s", config.max_speed);
    }

    let torque = control_torque(controls, config);
    body.apply_relative_torque(torque, ForceMode::Acceleration);

    body.set_linear_damping(linear_damping(state));

    if let Some(lift) = flap_lift(body, state) {
        body.apply_force(lift, ForceMode::Acceleration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::SimpleRigidBody;
    use approx::assert_relative_eq;

    fn airborne_body() -> SimpleRigidBody {
        let mut body = SimpleRigidBody::default();
        configure_rigid_body(&mut body, &StartConfig::airborne());
        body
    }

    #[test]
    fn test_configure_rigid_body() {
        let mut body = SimpleRigidBody::default();
        configure_rigid_body(&mut body, &StartConfig::grounded());
        assert_eq!(body.collision_detection(), CollisionDetectionMode::Continuous);
        assert!(body.use_gravity());
        assert_eq!(body.linear_damping(), 0.1);
        assert_eq!(body.angular_damping(), 0.5);
        assert_eq!(body.sleep_threshold(), 0.0);

        configure_rigid_body(&mut body, &StartConfig::airborne());
        assert!(!body.use_gravity());
    }

    #[test]
    fn test_damping_with_flaps_and_gear() {
        let mut state = AircraftState::default();
        state.set_flap_setting(1.0);
        state.set_gear_down(true);
        assert_eq!(linear_damping(&state), 0.6);

        state.set_gear_down(false);
        state.set_flap_setting(0.0);
        assert_eq!(linear_damping(&state), 0.1);
    }

    #[test]
    fn test_damping_is_absolute_each_step() {
        let mut body = airborne_body();
        let mut state = AircraftState::default();
        state.set_flap_setting(1.0);
        let config = AircraftConfig::default();
        let controls = ControlInput::default();

        apply_flight_dynamics(&mut body, &state, &config, &controls);
        let first = body.linear_damping();
        body.integrate(0.01);
        apply_flight_dynamics(&mut body, &state, &config, &controls);
        assert_eq!(body.linear_damping(), first);

        state.set_gear_down(false);
        apply_flight_dynamics(&mut body, &state, &config, &controls);
        assert_relative_eq!(body.linear_damping(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_thrust_acts_along_lateral_axis() {
        let mut body = airborne_body();
        let mut state = AircraftState::default();
        state.set_thrust(200.0);

        apply_flight_dynamics(&mut body, &state, &AircraftConfig::default(), &ControlInput::default());

        assert_eq!(body.pending_acceleration(), Vector3::new(200.0, 0.0, 0.0));
    }

    #[test]
    fn test_speed_clamp_preserves_direction() {
        let mut body = airborne_body();
        let direction = Vector3::new(3.0, 4.0, 0.0).normalize();
        body.set_linear_velocity(direction * 600.0);

        apply_flight_dynamics(
            &mut body,
            &AircraftState::default(),
            &AircraftConfig::default(),
            &ControlInput::default(),
        );

        let velocity = body.linear_velocity();
        assert_relative_eq!(velocity.norm(), 500.0, epsilon = 1e-9);
        assert_relative_eq!(velocity.normalize(), direction, epsilon = 1e-12);
    }

    #[test]
    fn test_speed_below_limit_untouched() {
        let mut body = airborne_body();
        body.set_linear_velocity(Vector3::new(0.0, 0.0, -120.0));
        assert!(!clamp_speed(&mut body, 500.0));
        assert_eq!(body.linear_velocity(), Vector3::new(0.0, 0.0, -120.0));
    }

    #[test]
    fn test_control_torque() {
        let config = AircraftConfig::default();
        let controls = ControlInput::new(0.2, 0.4, -1.0);
        let torque = control_torque(&controls, &config);

        assert_relative_eq!(torque.x, (-1.0 + 0.4 * 0.5) * 5.0, epsilon = 1e-12);
        assert_relative_eq!(torque.y, 0.4 * 2.0, epsilon = 1e-12);
        assert_relative_eq!(torque.z, -0.2 * 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flap_lift_requires_gravity_and_flaps() {
        let mut state = AircraftState::default();
        let mut body = SimpleRigidBody::default();
        configure_rigid_body(&mut body, &StartConfig::grounded());
        body.set_linear_velocity(Vector3::new(0.0, 0.0, -100.0));

        assert!(flap_lift(&body, &state).is_none());

        state.set_flap_setting(1.0);
        let lift = flap_lift(&body, &state).unwrap();
        assert_relative_eq!(lift, Vector3::new(0.0, 100.0, 0.0), epsilon = 1e-9);

        body.set_use_gravity(false);
        assert!(flap_lift(&body, &state).is_none());
    }

    #[test]
    fn test_flap_lift_zero_at_rest() {
        let mut state = AircraftState::default();
        state.set_flap_setting(1.0);
        let mut body = SimpleRigidBody::default();
        configure_rigid_body(&mut body, &StartConfig::grounded());

        let lift = flap_lift(&body, &state).unwrap();
        assert_eq!(lift, Vector3::zeros());
    }
}
