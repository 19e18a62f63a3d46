use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::env;

use flyer_control::{
    components::ControlInput,
    physics::SimpleRigidBody,
    resources::FlightControlConfig,
    systems::{ControlKey, InputAxis, Light, LogSink, ScriptedInput},
    FlightController,
};

const FRAME_RATE: f64 = 60.0;
const SIM_SECONDS: f64 = 30.0;

/// Prints its state changes instead of rendering them.
struct ConsoleLight {
    name: &'static str,
    active: bool,
}

impl Light for ConsoleLight {
    fn set_active(&mut self, active: bool) {
        if self.active != active {
            debug!("{} light {}", self.name, if active { "on" } else { "off" });
        }
        self.active = active;
    }
}

/// Keys held over `[start, end)` seconds of the take-off run.
fn script(t: f64, input: &mut ScriptedInput) {
    input.release_all();
    input.set_axis(InputAxis::MouseY, 0.0);

    if t < 10.0 {
        input.press(ControlKey::IncreaseThrottle);
    }
    if (0.5..0.6).contains(&t) {
        input.press(ControlKey::CycleLights);
    }
    if (1.0..1.1).contains(&t) {
        input.press(ControlKey::FlapsDown);
    }
    if (8.0..12.0).contains(&t) {
        input.set_axis(InputAxis::MouseY, -0.2);
    }
    if (12.0..12.1).contains(&t) {
        input.press(ControlKey::ToggleGear);
    }
    if (14.0..14.1).contains(&t) {
        input.press(ControlKey::FlapsUp);
    }
    if (20.0..20.5).contains(&t) {
        input.press(ControlKey::RollLeft);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Installs the global tracing subscriber.
    App::new().add_plugins(LogPlugin::default());

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("Loading flight config from {}", path);
            FlightControlConfig::load(path)?
        }
        None => FlightControlConfig::default(),
    };

    let lights = ["Beacon", "Display", "Taxi", "Landing"]
        .into_iter()
        .map(|name| {
            Some(ConsoleLight {
                name,
                active: false,
            })
        })
        .collect();

    let mut body = SimpleRigidBody::default();
    body.gravity = nalgebra::Vector3::new(0.0, -config.physics.gravity, 0.0);

    let mut controller: FlightController<SimpleRigidBody, ConsoleLight, LogSink> =
        FlightController::new(config.aircraft, config.start, Some(body), lights, LogSink);

    let frame_dt = 1.0 / FRAME_RATE;
    let physics_dt = config.physics.timestep;
    let mut input = ScriptedInput::new();
    let mut physics_time = 0.0;
    let mut frame = 0u64;

    while frame as f64 * frame_dt < SIM_SECONDS {
        let t = frame as f64 * frame_dt;
        script(t, &mut input);
        controller.on_frame_tick(frame_dt, &input);
        input.end_frame();

        while physics_time < t + frame_dt {
            controller.on_physics_tick(physics_dt);
            if let Some(body) = controller.body_mut() {
                body.integrate(physics_dt);
            }
            physics_time += physics_dt;
        }

        if frame % (FRAME_RATE as u64 * 5) == 0 {
            println!("{}", serde_json::to_string(&controller.telemetry())?);
        }
        frame += 1;
    }

    let controls: &ControlInput = controller.controls();
    if let Some(body) = controller.body() {
        info!(
            "Finished at {:.1} m/s, position {:?}, last controls {:?}",
            body.spatial.speed(),
            body.spatial.position,
            controls
        );
    }
    println!("{}", serde_json::to_string_pretty(&controller.telemetry())?);

    Ok(())
}
