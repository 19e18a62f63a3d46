use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// How an applied force or torque is converted into acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceMode {
    /// Newtonian force, divided by mass (or inertia for torques).
    Force,
    /// Applied directly as an acceleration, independent of mass.
    Acceleration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionDetectionMode {
    #[default]
    Discrete,
    Continuous,
}

/// The solver-owned rigid body the flight controller drives.
///
/// Implementations own the authoritative velocity. Forces and torques are accumulated
/// until the solver's next step; reads of the velocity must reflect the solver state,
/// not a cached copy.
pub trait RigidBody {
    /// Adds a world-frame force for the next solver step.
    fn apply_force(&mut self, force: Vector3<f64>, mode: ForceMode);
    /// Adds a body-frame torque for the next solver step.
    fn apply_relative_torque(&mut self, torque: Vector3<f64>, mode: ForceMode);

    fn linear_velocity(&self) -> Vector3<f64>;
    fn set_linear_velocity(&mut self, velocity: Vector3<f64>);

    fn linear_damping(&self) -> f64;
    fn set_linear_damping(&mut self, damping: f64);
    fn angular_damping(&self) -> f64;
    fn set_angular_damping(&mut self, damping: f64);

    fn use_gravity(&self) -> bool;
    fn set_use_gravity(&mut self, enabled: bool);

    fn set_collision_detection(&mut self, mode: CollisionDetectionMode);
    /// Energy threshold below which the body may sleep; 0 keeps it always awake.
    fn set_sleep_threshold(&mut self, threshold: f64);

    /// Body-local lateral (+X) axis in world space.
    fn right(&self) -> Vector3<f64>;
    /// Body-local up (+Y) axis in world space.
    fn up(&self) -> Vector3<f64>;
}
