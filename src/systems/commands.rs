use crate::components::{AircraftConfig, AircraftState};
use crate::systems::{advance_light_stage, ControlKey, InputDevice, LightBank, StatusSink};

/// Applies one rendered frame of pilot commands to the aircraft state.
///
/// Throttle keys ramp thrust by `throttle_increment * dt` while held and report every
/// frame. Increase is applied before decrease, each clamped on its own, so holding both
/// ends on the decreased value. Flaps, gear and lights react to rising edges only.
pub fn process_frame_commands<I, B, S>(
    state: &mut AircraftState,
    config: &AircraftConfig,
    device: &I,
    dt: f64,
    lights: &mut B,
    sink: &mut S,
) where
    I: InputDevice + ?Sized,
    B: LightBank + ?Sized,
    S: StatusSink + ?Sized,
{
    let step = config.throttle_increment * dt;

    if device.is_key_held(ControlKey::IncreaseThrottle) {
        state.set_thrust(state.thrust() + step);
        report_throttle(state, sink);
    }

    if device.is_key_held(ControlKey::DecreaseThrottle) {
        state.set_thrust(state.thrust() - step);
        report_throttle(state, sink);
    }

    if device.is_key_rising_edge(ControlKey::FlapsUp) {
        state.set_flap_setting(0.0);
        sink.emit("Flaps: Up (0)");
    }

    if device.is_key_rising_edge(ControlKey::FlapsDown) {
        state.set_flap_setting(1.0);
        sink.emit("Flaps: Down (1)");
    }

    if device.is_key_rising_edge(ControlKey::ToggleGear) {
        let down = state.toggle_gear();
        sink.emit(&format!("Gear: {}", if down { "Down" } else { "Up" }));
    }

    if device.is_key_rising_edge(ControlKey::CycleLights) {
        advance_light_stage(state, lights, sink);
    }
}

fn report_throttle<S: StatusSink + ?Sized>(state: &AircraftState, sink: &mut S) {
    sink.emit(&format!(
        "Throttle: {:.0} / {:.0}",
        state.thrust(),
        state.max_thrust()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::LightStage;
    use crate::systems::{Light, ScriptedInput};
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    struct NoLight;

    impl Light for NoLight {
        fn set_active(&mut self, _active: bool) {}
    }

    fn setup() -> (AircraftState, AircraftConfig, Vec<Option<NoLight>>, Vec<String>) {
        let config = AircraftConfig::default();
        let state = AircraftState::new(&config);
        (state, config, Vec::new(), Vec::new())
    }

    #[test]
    fn test_throttle_ramp_one_second() {
        let (mut state, config, mut lights, mut log) = setup();
        let mut input = ScriptedInput::new();
        input.press(ControlKey::IncreaseThrottle);

        process_frame_commands(&mut state, &config, &input, 1.0, &mut lights, &mut log);

        assert_eq!(state.thrust(), 50.0);
        assert_eq!(log, vec!["Throttle: 50 / 1000".to_string()]);
    }

    #[test]
    fn test_throttle_ramp_accumulates_over_frames() {
        let (mut state, config, mut lights, mut log) = setup();
        let mut input = ScriptedInput::new();
        input.press(ControlKey::IncreaseThrottle);

        for _ in 0..60 {
            process_frame_commands(&mut state, &config, &input, 1.0 / 60.0, &mut lights, &mut log);
            input.end_frame();
        }

        assert_relative_eq!(state.thrust(), 50.0, epsilon = 1e-9);
        assert_eq!(log.len(), 60);
    }

    #[test]
    fn test_throttle_stays_in_bounds() {
        let (mut state, config, mut lights, mut log) = setup();
        let mut input = ScriptedInput::new();

        input.press(ControlKey::IncreaseThrottle);
        for _ in 0..100 {
            process_frame_commands(&mut state, &config, &input, 0.5, &mut lights, &mut log);
            assert!(state.thrust() >= 0.0 && state.thrust() <= config.max_thrust);
        }
        assert_eq!(state.thrust(), config.max_thrust);

        input.release_all();
        input.press(ControlKey::DecreaseThrottle);
        for _ in 0..100 {
            process_frame_commands(&mut state, &config, &input, 0.5, &mut lights, &mut log);
            assert!(state.thrust() >= 0.0 && state.thrust() <= config.max_thrust);
        }
        assert_eq!(state.thrust(), 0.0);
    }

    #[test]
    fn test_both_throttle_keys_decrease_wins() {
        let (mut state, config, mut lights, mut log) = setup();
        state.set_thrust(500.0);
        let mut input = ScriptedInput::new();
        input.press(ControlKey::IncreaseThrottle);
        input.press(ControlKey::DecreaseThrottle);

        process_frame_commands(&mut state, &config, &input, 1.0, &mut lights, &mut log);
        assert_eq!(state.thrust(), 500.0);

        // At full thrust the increase is clipped, so the decrease pulls it down.
        state.set_thrust(config.max_thrust);
        process_frame_commands(&mut state, &config, &input, 1.0, &mut lights, &mut log);
        assert_eq!(state.thrust(), config.max_thrust - config.throttle_increment);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_flaps_are_edge_triggered() {
        let (mut state, config, mut lights, mut log) = setup();
        let mut input = ScriptedInput::new();

        input.press(ControlKey::FlapsDown);
        process_frame_commands(&mut state, &config, &input, 0.016, &mut lights, &mut log);
        input.end_frame();
        process_frame_commands(&mut state, &config, &input, 0.016, &mut lights, &mut log);
        assert_eq!(state.flap_setting(), 1.0);
        assert_eq!(log, vec!["Flaps: Down (1)".to_string()]);

        input.release_all();
        input.end_frame();
        input.press(ControlKey::FlapsUp);
        process_frame_commands(&mut state, &config, &input, 0.016, &mut lights, &mut log);
        assert_eq!(state.flap_setting(), 0.0);
        assert_eq!(log.last().unwrap(), "Flaps: Up (0)");
    }

    #[test]
    fn test_gear_toggles_once_per_press() {
        let (mut state, config, mut lights, mut log) = setup();
        let mut input = ScriptedInput::new();
        input.press(ControlKey::ToggleGear);

        for _ in 0..10 {
            process_frame_commands(&mut state, &config, &input, 0.016, &mut lights, &mut log);
            input.end_frame();
        }
        assert!(!state.gear_down());
        assert_eq!(log, vec!["Gear: Up".to_string()]);

        input.release(ControlKey::ToggleGear);
        input.end_frame();
        input.press(ControlKey::ToggleGear);
        process_frame_commands(&mut state, &config, &input, 0.016, &mut lights, &mut log);
        assert!(state.gear_down());
        assert_eq!(log.last().unwrap(), "Gear: Down");
    }

    #[test]
    fn test_cycle_lights_advances_stage() {
        let (mut state, config, mut lights, mut log) = setup();
        let mut input = ScriptedInput::new();
        input.press(ControlKey::CycleLights);

        process_frame_commands(&mut state, &config, &input, 0.016, &mut lights, &mut log);

        assert_eq!(state.light_stage(), LightStage::new(1));
        assert_eq!(log, vec!["Lights ON (State 1): Beacon".to_string()]);
    }

    #[test]
    fn test_idle_frame_changes_nothing() {
        let (mut state, config, mut lights, mut log) = setup();
        let before = state;
        let input = ScriptedInput::new();

        process_frame_commands(&mut state, &config, &input, 0.016, &mut lights, &mut log);

        assert_eq!(state, before);
        assert!(log.is_empty());
    }
}
