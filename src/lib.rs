pub mod components;
pub mod controller;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;

pub use controller::{FlightController, FlightTelemetry};
pub use plugins::{FlightControlPlugin, FlightSet, FlightStatusEvent};
