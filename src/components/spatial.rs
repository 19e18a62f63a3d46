use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Spatial state of a rigid body.
///
/// The body frame is Y-up: +X is the right wing, +Y is up and -Z is the nose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn with_attitude(mut self, attitude: UnitQuaternion<f64>) -> Self {
        self.attitude = attitude;
        self
    }

    /// Body +X axis in world space.
    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    /// Body +Y axis in world space.
    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    /// Body -Z axis in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * -Vector3::z()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}
