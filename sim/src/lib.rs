//! Headless host for the sailing model: fixed-step integrator, wind source,
//! scripted controls and telemetry recording, wired as a Bevy app.

use std::time::Duration;

use anyhow::Result;
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use sailing::{math::deg_to_rad, Boat, Vec2, VesselBody};
use tracing::info;

pub mod args;
pub mod config;
pub mod recorder;
pub mod systems;

pub use args::Args;
pub use config::{load_config, parse_config, Config};
use recorder::Recorder;
use systems::{
    advance_clock, apply_boat_forces, finish_run, integrate_bodies, publish_telemetry,
    read_controls, run_incomplete, update_wind, BoatComp, BodyComp, ControlScript,
    CurrentInputs, CurrentWind, Sailboat, SimClock, StepDebugComp, TelemetryComp,
    WindSchedule,
};

pub fn build_sim_app(cfg: Config) -> Result<App> {
    cfg.validate()?;

    let spec = cfg.boat_spec();
    let mut body = VesselBody::new(spec.mass);
    body.orientation = deg_to_rad(cfg.body.heading_deg);
    body.position = Vec2::from_array(cfg.body.position);
    body.velocity = Vec2::from_array(cfg.body.velocity);
    let boat = Boat::new(spec);

    let recorder = match &cfg.record {
        Some(path) => Recorder::create(path, cfg.tick_hz, cfg.boat_name())?,
        None => Recorder::disabled(),
    };
    info!(
        boat = cfg.boat_name(),
        displacement = boat.displacement(),
        run_id = %recorder.run_id,
        recording = recorder.is_enabled(),
        "sailboat spawned"
    );

    let mut app = App::new();
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f32(
        1.0 / cfg.tick_hz,
    ))))
    .insert_resource(Time::<Fixed>::from_hz(cfg.tick_hz as f64))
    .insert_resource(WindSchedule::from_config(&cfg))
    .insert_resource(ControlScript { windows: cfg.controls.clone() })
    .insert_resource(recorder)
    .init_resource::<SimClock>()
    .init_resource::<CurrentWind>()
    .init_resource::<CurrentInputs>()
    .add_systems(
        FixedUpdate,
        (
            advance_clock,
            update_wind,
            read_controls,
            apply_boat_forces,
            integrate_bodies,
            publish_telemetry,
            finish_run,
        )
            .chain()
            .run_if(run_incomplete),
    );

    app.world_mut().spawn((
        Sailboat,
        BoatComp(boat),
        BodyComp { body, inertia: cfg.body.inertia },
        StepDebugComp::default(),
        TelemetryComp::default(),
    ));
    app.insert_resource(cfg);
    Ok(app)
}

/// Run `n` fixed ticks back to back, ignoring wall-clock pacing.
pub fn run_ticks(app: &mut App, n: u64) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}
