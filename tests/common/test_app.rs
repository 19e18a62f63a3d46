use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use flyer_control::{FlightControlPlugin, FlightStatusEvent};

/// Every status line published so far, in order.
#[derive(Resource, Debug, Default)]
pub struct StatusLog(pub Vec<String>);

fn record_status(mut events: EventReader<FlightStatusEvent>, mut log: ResMut<StatusLog>) {
    log.0.extend(events.read().map(|event| event.0.clone()));
}

/// Headless app running the flight plugin at a fixed 60 Hz frame rate.
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub const FRAME_DT: f64 = 1.0 / 60.0;

    pub fn new(plugin: FlightControlPlugin) -> Self {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                Self::FRAME_DT,
            )))
            .add_plugins(plugin)
            .init_resource::<StatusLog>()
            .add_systems(Last, record_status);

        // Runs startup; the first frame has a zero delta.
        app.update();

        Self { app }
    }

    /// Runs one frame, then clears this frame's key edges.
    pub fn run_frame(&mut self) {
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
    }

    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.run_frame();
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Presses `key` for exactly one frame.
    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.run_frame();
        self.release(key);
        self.run_frame();
    }

    pub fn status_log(&self) -> &[String] {
        &self.app.world().resource::<StatusLog>().0
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
