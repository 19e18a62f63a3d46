pub mod aircraft;
pub mod controller;
pub mod controls;
pub mod lights;
pub mod physics;
pub mod spatial;

pub use aircraft::{AircraftConfig, AircraftState, ConfigError, StartConfig};
pub use controller::PlayerController;
pub use controls::ControlInput;
pub use lights::{AircraftLights, LightAssignment, LightRole, LightStage, MAX_LIGHT_STAGE};
pub use physics::RigidBodyComponent;
pub use spatial::SpatialComponent;
