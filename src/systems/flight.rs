use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AircraftConfig, AircraftLights, AircraftState, ControlInput, LightRole, LightStage,
    PlayerController, RigidBodyComponent,
};
use crate::physics::SimpleRigidBody;
use crate::plugins::{FlightStatusEvent, StatusEvents};
use crate::resources::{FlightControlConfig, InputBindings};
use crate::systems::{
    apply_flight_dynamics, configure_rigid_body, process_frame_commands, sample_control_input,
    KeyboardMouseInput, LightBank, LightReport, StatusSink,
};

/// Light entities of one aircraft. Switches are recorded and applied to the
/// entities' `Visibility` once the frame's commands are done.
struct EntityLights<'a> {
    entities: &'a [Entity],
    switched: Vec<(Entity, bool)>,
}

impl<'a> EntityLights<'a> {
    fn new(entities: &'a [Entity]) -> Self {
        Self {
            entities,
            switched: Vec::new(),
        }
    }

    fn apply(self, query: &mut Query<&mut Visibility, With<LightRole>>) {
        for (entity, active) in self.switched {
            // Despawned lights are skipped like missing ones.
            if let Ok(mut visibility) = query.get_mut(entity) {
                *visibility = if active {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
            }
        }
    }
}

impl LightBank for EntityLights<'_> {
    fn light_count(&self) -> usize {
        self.entities.len()
    }

    fn set_light_active(&mut self, index: usize, active: bool) {
        if let Some(&entity) = self.entities.get(index) {
            self.switched.push((entity, active));
        }
    }
}

/// Spawns the player aircraft, its rigid body and one light entity per role.
pub fn spawn_player_aircraft(
    mut commands: Commands,
    config: Res<FlightControlConfig>,
    mut status: EventWriter<FlightStatusEvent>,
) {
    info!("Spawning player aircraft...");

    let lights: Vec<Entity> = LightRole::ALL
        .iter()
        .map(|role| {
            commands
                .spawn((Name::new(format!("{} Light", role)), *role, Visibility::Hidden))
                .id()
        })
        .collect();

    let aircraft = config.aircraft.validated_or_default();
    let mut body = SimpleRigidBody::default();
    body.gravity = Vector3::new(0.0, -config.physics.gravity, 0.0);
    configure_rigid_body(&mut body, &config.start);

    let mut state = AircraftState::new(&aircraft);
    state.set_thrust(config.start.initial_thrust(&aircraft));

    commands.spawn((
        Name::new("Player Aircraft"),
        aircraft,
        state,
        ControlInput::default(),
        RigidBodyComponent::new(body),
        AircraftLights(lights),
        PlayerController::new(),
        Transform::default(),
    ));

    // Lights are spawned hidden, so only the report is left to do.
    StatusEvents::new(&mut status).emit(&LightReport::new(LightStage::OFF).to_string());
}

/// Reports every newly spawned aircraft that has no rigid body, once. Such aircraft
/// still take commands but never get physics.
pub fn report_missing_rigid_bodies(
    query: Query<Option<&Name>, (Added<AircraftState>, Without<RigidBodyComponent>)>,
    mut status: EventWriter<FlightStatusEvent>,
) {
    for name in query.iter() {
        let message = format!(
            "Rigid body is required! Flight physics disabled for {}",
            name.map(|n| n.as_str()).unwrap_or("unnamed aircraft")
        );
        error!("{}", message);
        status.send(FlightStatusEvent(message));
    }
}

/// Per rendered frame: samples the stick and applies discrete pilot commands.
pub fn frame_tick_system(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Option<Res<AccumulatedMouseMotion>>,
    bindings: Res<InputBindings>,
    mut aircraft: Query<(
        &AircraftConfig,
        &mut AircraftState,
        &mut ControlInput,
        &AircraftLights,
        &PlayerController,
    )>,
    mut lights: Query<&mut Visibility, With<LightRole>>,
    mut status: EventWriter<FlightStatusEvent>,
) {
    let mouse_delta = mouse_motion.map(|motion| motion.delta).unwrap_or(Vec2::ZERO);
    let device = KeyboardMouseInput::new(&keyboard, mouse_delta, &bindings);
    let dt = time.delta_secs_f64();

    for (config, mut state, mut controls, aircraft_lights, controller) in aircraft.iter_mut() {
        if !controller.accepts_input() {
            continue;
        }

        *controls = sample_control_input(&device, config);

        let mut bank = EntityLights::new(&aircraft_lights.0);
        let mut sink = StatusEvents::new(&mut status);
        process_frame_commands(&mut state, config, &device, dt, &mut bank, &mut sink);
        bank.apply(&mut lights);
    }
}

/// Per fixed step: submits thrust, torque, damping and lift to each rigid body.
pub fn flight_dynamics_system(
    mut query: Query<(
        &AircraftConfig,
        &AircraftState,
        &ControlInput,
        &mut RigidBodyComponent,
    )>,
) {
    for (config, state, controls, mut body) in query.iter_mut() {
        apply_flight_dynamics(&mut body.0, state, config, controls);
    }
}

/// Per fixed step: advances the rigid bodies and mirrors them into their transforms.
pub fn rigid_body_integration_system(
    time: Res<Time>,
    mut query: Query<(&mut RigidBodyComponent, Option<&mut Transform>)>,
) {
    let dt = time.delta_secs_f64();

    for (mut body, transform) in query.iter_mut() {
        body.integrate(dt);
        if let Some(mut transform) = transform {
            body.sync_transform(&mut transform);
        }
    }
}
