use bevy::prelude::*;
use nalgebra::{Matrix3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;
use crate::physics::{CollisionDetectionMode, ForceMode, RigidBody};

/// Standard gravity along world -Y [m/s^2].
pub const GRAVITY: f64 = 9.81;

/// A minimal rigid-body integrator used when no external solver is attached.
///
/// Applied forces and torques are accumulated as accelerations and consumed by
/// [`SimpleRigidBody::integrate`]. Damping follows the common game-engine form
/// `v *= 1 / (1 + dt * damping)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleRigidBody {
    pub spatial: SpatialComponent,
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    inertia_inv: Matrix3<f64>,
    pub gravity: Vector3<f64>,
    use_gravity: bool,
    linear_damping: f64,
    angular_damping: f64,
    sleep_threshold: f64,
    collision_detection: CollisionDetectionMode,
    sleeping: bool,
    /// Pending world-frame linear acceleration [m/s^2]
    linear_acceleration: Vector3<f64>,
    /// Pending body-frame angular acceleration [rad/s^2]
    angular_acceleration: Vector3<f64>,
}

impl Default for SimpleRigidBody {
    fn default() -> Self {
        Self::new(1000.0, Matrix3::identity() * 1000.0)
    }
}

impl SimpleRigidBody {
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Self {
        let inertia_inv = inertia.try_inverse().unwrap_or(Matrix3::identity());
        Self {
            spatial: SpatialComponent::default(),
            mass,
            inertia,
            inertia_inv,
            gravity: Vector3::new(0.0, -GRAVITY, 0.0),
            use_gravity: true,
            linear_damping: 0.0,
            angular_damping: 0.05,
            sleep_threshold: 0.005,
            collision_detection: CollisionDetectionMode::Discrete,
            sleeping: false,
            linear_acceleration: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
        }
    }

    pub fn with_spatial(mut self, spatial: SpatialComponent) -> Self {
        self.spatial = spatial;
        self
    }

    pub fn collision_detection(&self) -> CollisionDetectionMode {
        self.collision_detection
    }

    pub fn sleep_threshold(&self) -> f64 {
        self.sleep_threshold
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Acceleration queued for the next step, excluding gravity.
    pub fn pending_acceleration(&self) -> Vector3<f64> {
        self.linear_acceleration
    }

    pub fn pending_angular_acceleration(&self) -> Vector3<f64> {
        self.angular_acceleration
    }

    fn wake(&mut self) {
        self.sleeping = false;
    }

    /// Advances the body by `dt` seconds and clears the accumulated inputs.
    pub fn integrate(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        let has_input = self.linear_acceleration != Vector3::zeros()
            || self.angular_acceleration != Vector3::zeros();
        if self.sleeping && !has_input {
            return;
        }

        let mut acceleration = self.linear_acceleration;
        if self.use_gravity {
            acceleration += self.gravity;
        }

        let spatial = &mut self.spatial;
        spatial.velocity += acceleration * dt;
        spatial.velocity *= 1.0 / (1.0 + dt * self.linear_damping);

        spatial.angular_velocity += self.angular_acceleration * dt;
        spatial.angular_velocity *= 1.0 / (1.0 + dt * self.angular_damping);

        spatial.position += spatial.velocity * dt;

        // Angular velocity is body frame, so the increment is applied on the right.
        if spatial.angular_velocity.norm() > 0.0 {
            let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
            spatial.attitude = spatial.attitude * rotation;
            spatial.attitude =
                UnitQuaternion::from_quaternion(spatial.attitude.into_inner().normalize());
        }

        self.linear_acceleration = Vector3::zeros();
        self.angular_acceleration = Vector3::zeros();

        if self.sleep_threshold > 0.0 && !has_input && !self.use_gravity {
            let energy = 0.5
                * (spatial.velocity.norm_squared() + spatial.angular_velocity.norm_squared());
            if energy < self.sleep_threshold {
                debug!("Rigid body fell asleep with energy {:.6}", energy);
                spatial.velocity = Vector3::zeros();
                spatial.angular_velocity = Vector3::zeros();
                self.sleeping = true;
            }
        }
    }
}

impl RigidBody for SimpleRigidBody {
    fn apply_force(&mut self, force: Vector3<f64>, mode: ForceMode) {
        let acceleration = match mode {
            ForceMode::Force => force / self.mass,
            ForceMode::Acceleration => force,
        };
        self.linear_acceleration += acceleration;
        self.wake();
    }

    fn apply_relative_torque(&mut self, torque: Vector3<f64>, mode: ForceMode) {
        let angular_acceleration = match mode {
            ForceMode::Force => self.inertia_inv * torque,
            ForceMode::Acceleration => torque,
        };
        self.angular_acceleration += angular_acceleration;
        self.wake();
    }

    fn linear_velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vector3<f64>) {
        self.spatial.velocity = velocity;
        self.wake();
    }

    fn linear_damping(&self) -> f64 {
        self.linear_damping
    }

    fn set_linear_damping(&mut self, damping: f64) {
        self.linear_damping = damping.max(0.0);
    }

    fn angular_damping(&self) -> f64 {
        self.angular_damping
    }

    fn set_angular_damping(&mut self, damping: f64) {
        self.angular_damping = damping.max(0.0);
    }

    fn use_gravity(&self) -> bool {
        self.use_gravity
    }

    fn set_use_gravity(&mut self, enabled: bool) {
        self.use_gravity = enabled;
        self.wake();
    }

    fn set_collision_detection(&mut self, mode: CollisionDetectionMode) {
        self.collision_detection = mode;
    }

    fn set_sleep_threshold(&mut self, threshold: f64) {
        self.sleep_threshold = threshold.max(0.0);
        if self.sleep_threshold == 0.0 {
            self.wake();
        }
    }

    fn right(&self) -> Vector3<f64> {
        self.spatial.right()
    }

    fn up(&self) -> Vector3<f64> {
        self.spatial.up()
    }
}
