pub mod body;
pub mod traits;

pub use body::SimpleRigidBody;
pub use traits::{CollisionDetectionMode, ForceMode, RigidBody};
