pub mod flight;
pub mod input;
pub mod physics;

pub use flight::FlightControlConfig;
pub use input::InputBindings;
pub use physics::PhysicsConfig;
