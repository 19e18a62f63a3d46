use std::fmt;

use crate::components::{AircraftState, LightAssignment, LightStage};
use crate::systems::StatusSink;

/// A switchable light object owned by the host.
pub trait Light {
    fn set_active(&mut self, active: bool);
}

/// Ordered lights of one aircraft. Slots may be missing and the bank may hold
/// fewer lights than there are stages.
pub trait LightBank {
    fn light_count(&self) -> usize;
    /// Switches the light at `index`. Missing lights are ignored.
    fn set_light_active(&mut self, index: usize, active: bool);
}

impl<L: Light> LightBank for [Option<L>] {
    fn light_count(&self) -> usize {
        self.len()
    }

    fn set_light_active(&mut self, index: usize, active: bool) {
        if let Some(Some(light)) = self.get_mut(index) {
            light.set_active(active);
        }
    }
}

impl<L: Light> LightBank for Vec<Option<L>> {
    fn light_count(&self) -> usize {
        self.len()
    }

    fn set_light_active(&mut self, index: usize, active: bool) {
        self.as_mut_slice().set_light_active(index, active);
    }
}

/// Outcome of switching the lights to a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightReport {
    pub stage: LightStage,
    pub assignment: LightAssignment,
}

impl LightReport {
    pub fn new(stage: LightStage) -> Self {
        Self {
            stage,
            assignment: stage.assignment(),
        }
    }

    /// "all off", or the lit role names joined with commas.
    pub fn description(&self) -> String {
        self.assignment.description()
    }
}

impl fmt::Display for LightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stage.is_off() {
            write!(f, "All lights OFF")
        } else {
            write!(
                f,
                "Lights ON (State {}): {}",
                self.stage.index(),
                self.description()
            )
        }
    }
}

/// Drives every light in the bank for `stage` and reports the result.
///
/// Light `i` is lit when `i < stage`, whatever its role.
pub fn apply_light_stage<B, S>(stage: LightStage, lights: &mut B, sink: &mut S) -> LightReport
where
    B: LightBank + ?Sized,
    S: StatusSink + ?Sized,
{
    for index in 0..lights.light_count() {
        lights.set_light_active(index, stage.is_light_active(index));
    }

    let report = LightReport::new(stage);
    sink.emit(&report.to_string());
    report
}

/// Moves the aircraft to the next light stage, applies it and reports it.
pub fn advance_light_stage<B, S>(
    state: &mut AircraftState,
    lights: &mut B,
    sink: &mut S,
) -> LightReport
where
    B: LightBank + ?Sized,
    S: StatusSink + ?Sized,
{
    let stage = state.light_stage().advance();
    state.set_light_stage(stage.index() as u32);
    apply_light_stage(stage, lights, sink)
}
