use bevy::prelude::*;

use crate::systems::StatusSink;

/// A status line for the HUD or console: throttle, flaps, gear or lights.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct FlightStatusEvent(pub String);

/// Logs status lines and publishes them as [`FlightStatusEvent`]s.
pub struct StatusEvents<'a, 'w> {
    writer: &'a mut EventWriter<'w, FlightStatusEvent>,
}

impl<'a, 'w> StatusEvents<'a, 'w> {
    pub fn new(writer: &'a mut EventWriter<'w, FlightStatusEvent>) -> Self {
        Self { writer }
    }
}

impl StatusSink for StatusEvents<'_, '_> {
    fn emit(&mut self, message: &str) {
        info!("{}", message);
        self.writer.send(FlightStatusEvent(message.to_string()));
    }
}
