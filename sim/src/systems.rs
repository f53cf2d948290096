use bevy::app::AppExit;
use bevy_ecs::prelude::*;
use protocol::Message;
use sailing::{step_boat_dbg, Boat, BoatInputs, BoatStepDebug, BoatTelemetry, Vec2, VesselBody, Wind};
use tracing::{debug, info};

use crate::config::{Config, ControlWindow};
use crate::recorder::{control_frame, telemetry_frame, Recorder};

#[derive(Component)]
pub struct Sailboat;

#[derive(Component, Debug, Clone)]
pub struct BoatComp(pub Boat);

/// Host-owned rigid body. Only the integrator writes kinematics.
#[derive(Component, Debug, Clone)]
pub struct BodyComp {
    pub body: VesselBody,
    pub inertia: f32,
}

#[derive(Component, Debug, Clone, Default)]
pub struct StepDebugComp(pub BoatStepDebug);

#[derive(Component, Debug, Clone, Default)]
pub struct TelemetryComp(pub BoatTelemetry);

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SimClock {
    pub tick: u64,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CurrentWind(pub Vec2);

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CurrentInputs(pub BoatInputs);

/// Environment source: base wind plus timed shifts, sorted by tick.
#[derive(Resource, Debug, Clone)]
pub struct WindSchedule {
    base: Wind,
    shifts: Vec<(u64, Wind)>,
}

impl WindSchedule {
    pub fn from_config(cfg: &Config) -> Self {
        let mut shifts: Vec<(u64, Wind)> = cfg
            .wind
            .shifts
            .iter()
            .map(|s| (s.at_tick, Wind::from_true(s.tws, s.gwd)))
            .collect();
        shifts.sort_by_key(|(at, _)| *at);
        Self { base: Wind::from_true(cfg.wind.tws, cfg.wind.gwd), shifts }
    }

    pub fn wind_at(&self, tick: u64) -> Wind {
        self.shifts
            .iter()
            .take_while(|(at, _)| *at <= tick)
            .last()
            .map(|(_, w)| *w)
            .unwrap_or(self.base)
    }
}

/// Input source: scripted windows of held buttons. Overlapping windows OR together.
#[derive(Resource, Debug, Clone, Default)]
pub struct ControlScript {
    pub windows: Vec<ControlWindow>,
}

impl ControlScript {
    pub fn inputs_at(&self, tick: u64) -> BoatInputs {
        self.windows.iter().filter(|w| w.covers(tick)).fold(BoatInputs::default(), |acc, w| {
            let i = w.inputs();
            BoatInputs {
                trim_in: acc.trim_in || i.trim_in,
                trim_out: acc.trim_out || i.trim_out,
                turn_left: acc.turn_left || i.turn_left,
                turn_right: acc.turn_right || i.turn_right,
            }
        })
    }
}

/// Gate for the tick chain: nothing simulates or records after the last tick,
/// even when one frame catches up several fixed steps.
pub fn run_incomplete(clock: Res<SimClock>, cfg: Res<Config>) -> bool {
    clock.tick < cfg.ticks
}

pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.tick += 1;
}

pub fn update_wind(
    clock: Res<SimClock>,
    schedule: Res<WindSchedule>,
    mut wind: ResMut<CurrentWind>,
    mut recorder: ResMut<Recorder>,
) {
    let next = schedule.wind_at(clock.tick).vector;
    if next != wind.0 || clock.tick == 1 {
        debug!(tick = clock.tick, x = next.x, y = next.y, "wind update");
        recorder.record(&Message::WindTick { tick: clock.tick, wind: next.to_array() });
    }
    wind.0 = next;
}

pub fn read_controls(
    clock: Res<SimClock>,
    script: Res<ControlScript>,
    mut inputs: ResMut<CurrentInputs>,
    mut recorder: ResMut<Recorder>,
) {
    inputs.0 = script.inputs_at(clock.tick);
    if inputs.0 != BoatInputs::default() {
        recorder.record(&Message::InputTick { tick: clock.tick, controls: control_frame(inputs.0) });
    }
}

pub fn apply_boat_forces(
    wind: Res<CurrentWind>,
    inputs: Res<CurrentInputs>,
    mut q: Query<(&mut BoatComp, &mut BodyComp, &mut StepDebugComp), With<Sailboat>>,
) {
    for (mut boat, mut body, mut dbg) in &mut q {
        let mut step = BoatStepDebug::default();
        step_boat_dbg(&mut boat.0, inputs.0, wind.0, &mut body.body, Some(&mut step));
        dbg.0 = step;
    }
}

/// Stand-in for the external physics engine: semi-implicit Euler in tick
/// units, then clear the accumulators for the next tick.
pub fn integrate_body(b: &mut VesselBody, inertia: f32) {
    b.velocity += b.force / b.mass();
    b.position += b.velocity;
    b.angular_velocity += b.torque / inertia;
    b.orientation += b.angular_velocity;
    b.clear_accumulators();
}

pub fn integrate_bodies(mut q: Query<&mut BodyComp, With<Sailboat>>) {
    for mut comp in &mut q {
        let inertia = comp.inertia;
        integrate_body(&mut comp.body, inertia);
    }
}

pub fn publish_telemetry(
    clock: Res<SimClock>,
    cfg: Res<Config>,
    mut recorder: ResMut<Recorder>,
    mut q: Query<(&BoatComp, &BodyComp, &mut TelemetryComp), With<Sailboat>>,
) {
    for (boat, body, mut telemetry) in &mut q {
        let t = boat.0.telemetry(&body.body);
        telemetry.0 = t;
        recorder.record(&Message::Telemetry(telemetry_frame(clock.tick, &body.body, &t)));
        if cfg.log_every > 0 && clock.tick % cfg.log_every == 0 {
            debug!(
                tick = clock.tick,
                heading = t.heading,
                cog = t.cog,
                sog = t.sog,
                awa = t.awa,
                aws = t.aws,
                tack = %t.tack,
                trim = t.trimmed_sail_angle,
                aoa = t.angle_of_attack,
                "telemetry"
            );
        }
    }
}

pub fn finish_run(
    clock: Res<SimClock>,
    cfg: Res<Config>,
    mut recorder: ResMut<Recorder>,
    q: Query<&TelemetryComp, With<Sailboat>>,
    mut exit: EventWriter<AppExit>,
) {
    if clock.tick != cfg.ticks {
        return;
    }
    recorder.record(&Message::Finished { ticks: clock.tick });
    recorder.flush();
    for telemetry in &q {
        let t = &telemetry.0;
        info!(
            ticks = clock.tick,
            x = t.position.x,
            y = t.position.y,
            sog = t.sog,
            cog = t.cog,
            frames = recorder.frames(),
            "run complete"
        );
    }
    exit.write(AppExit::Success);
}
