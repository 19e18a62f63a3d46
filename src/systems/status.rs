use bevy::prelude::*;

/// Destination for human-readable status lines (throttle, flaps, gear, lights).
pub trait StatusSink {
    fn emit(&mut self, message: &str);
}

/// Writes status lines to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn emit(&mut self, message: &str) {
        info!("{}", message);
    }
}

/// Collects status lines, mostly for tests and replays.
impl StatusSink for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}
