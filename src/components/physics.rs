use bevy::prelude::*;

use crate::physics::SimpleRigidBody;

/// Rigid body simulated in the fixed-step schedule for an aircraft entity.
#[derive(Component, Debug, Clone, Default, Deref, DerefMut)]
pub struct RigidBodyComponent(pub SimpleRigidBody);

impl RigidBodyComponent {
    pub fn new(body: SimpleRigidBody) -> Self {
        Self(body)
    }

    /// Copies position and attitude into a render transform.
    pub fn sync_transform(&self, transform: &mut Transform) {
        let spatial = &self.0.spatial;
        transform.translation = Vec3::new(
            spatial.position.x as f32,
            spatial.position.y as f32,
            spatial.position.z as f32,
        );
        let q = spatial.attitude.quaternion();
        transform.rotation = Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32);
    }
}
