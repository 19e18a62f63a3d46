mod commands;
mod dynamics;
mod flight;
mod input;
mod lights;
mod status;

pub use commands::process_frame_commands;
pub use dynamics::{
    apply_flight_dynamics, clamp_speed, configure_rigid_body, control_torque, flap_lift,
    linear_damping, ANGULAR_DAMPING, BASE_LINEAR_DAMPING, FLAP_DRAG, FLAP_LIFT_FACTOR, GEAR_DRAG,
};
pub use flight::{
    flight_dynamics_system, frame_tick_system, report_missing_rigid_bodies,
    rigid_body_integration_system, spawn_player_aircraft,
};
pub use input::{
    sample_control_input, ControlKey, InputAxis, InputDevice, KeyboardMouseInput, ScriptedInput,
};
pub use lights::{advance_light_stage, apply_light_stage, Light, LightBank, LightReport};
pub use status::{LogSink, StatusSink};
