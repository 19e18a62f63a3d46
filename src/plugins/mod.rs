mod events;
mod flight;

pub use events::{FlightStatusEvent, StatusEvents};
pub use flight::{FlightControlPlugin, FlightSet};
