#[cfg(test)]
mod integration {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::PathBuf;
    use std::time::Duration;

    use anyhow::Result;
    use bevy_app::App;
    use bevy_time::TimeUpdateStrategy;
    use protocol::{read_all, Message, TelemetryFrame, WireTack};
    use sailing::{math::deg_to_rad, step_boat, Boat, VesselBody};
    use sim::recorder::{telemetry_frame, Recorder};
    use sim::systems::{integrate_body, ControlScript, SimClock, WindSchedule};
    use sim::{build_sim_app, parse_config, run_ticks, Config};
    use uuid::Uuid;

    const TICKS: u64 = 900;
    const SHIFT_TICK: u64 = 300;

    fn scenario(record: PathBuf) -> Result<Config> {
        let mut cfg = parse_config(&format!(
            r#"
ticks = {TICKS}
boat = "keelboat"

[wind]
tws = 6.0
gwd = 90.0

[[wind.shifts]]
at_tick = {SHIFT_TICK}
tws = 7.0
gwd = 110.0

[[controls]]
from_tick = 500
to_tick = 540
turn_right = true

[[controls]]
from_tick = 520
to_tick = 530
trim_out = true
"#
        ))?;
        cfg.record = Some(record);
        Ok(cfg)
    }

    fn temp_recording() -> PathBuf {
        std::env::temp_dir().join(format!("sailsim-{}.rec", Uuid::new_v4()))
    }

    fn read_recording(path: &PathBuf) -> Result<Vec<Message>> {
        let mut reader = BufReader::new(File::open(path)?);
        Ok(read_all(&mut reader)?)
    }

    fn telemetry_frames(msgs: &[Message]) -> Vec<TelemetryFrame> {
        msgs.iter()
            .filter_map(|m| match m {
                Message::Telemetry(t) => Some(*t),
                _ => None,
            })
            .collect()
    }

    /// Drive the model directly with the same wind, controls and integrator
    /// the host uses.
    fn replay_by_hand(cfg: &Config) -> Vec<TelemetryFrame> {
        let schedule = WindSchedule::from_config(cfg);
        let script = ControlScript { windows: cfg.controls.clone() };
        let spec = cfg.boat_spec();
        let mut body = VesselBody::new(spec.mass);
        body.orientation = deg_to_rad(cfg.body.heading_deg);
        let mut boat = Boat::new(spec);

        (1..=cfg.ticks)
            .map(|tick| {
                let wind = schedule.wind_at(tick).vector;
                step_boat(&mut boat, script.inputs_at(tick), wind, &mut body);
                integrate_body(&mut body, cfg.body.inertia);
                telemetry_frame(tick, &body, &boat.telemetry(&body))
            })
            .collect()
    }

    #[test]
    fn recording_has_one_telemetry_frame_per_tick() -> Result<()> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let path = temp_recording();
        let mut app = build_sim_app(scenario(path.clone())?)?;
        run_ticks(&mut app, TICKS);
        assert!(app.should_exit().is_some(), "host should stop after {TICKS} ticks");
        let written = app.world().resource::<Recorder>().frames();
        drop(app);

        let msgs = read_recording(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(msgs.len() as u64, written, "recorder frame count disagrees with file");
        assert!(matches!(&msgs[0], Message::Hello { boat, tick_hz, .. } if boat == "keelboat" && *tick_hz == 60.0));
        assert_eq!(msgs.last(), Some(&Message::Finished { ticks: TICKS }));

        let frames = telemetry_frames(&msgs);
        assert_eq!(frames.len() as u64, TICKS);
        for (i, f) in frames.iter().enumerate() {
            assert_eq!(f.tick, i as u64 + 1, "telemetry out of order");
            assert!((0.0..360.0).contains(&f.heading), "tick {}: heading {}", f.tick, f.heading);
            assert!((0.0..360.0).contains(&f.cog), "tick {}: cog {}", f.tick, f.cog);
            assert!((0.0..360.0).contains(&f.awa), "tick {}: awa {}", f.tick, f.awa);
            assert!(f.sog >= 0.0 && f.aws >= 0.0);
        }

        let wind_ticks: Vec<u64> = msgs
            .iter()
            .filter_map(|m| match m {
                Message::WindTick { tick, .. } => Some(*tick),
                _ => None,
            })
            .collect();
        assert_eq!(wind_ticks, vec![1, SHIFT_TICK]);

        let inputs: Vec<u64> = msgs
            .iter()
            .filter_map(|m| match m {
                Message::InputTick { tick, .. } => Some(*tick),
                _ => None,
            })
            .collect();
        assert_eq!(inputs.len(), 40);
        assert_eq!(inputs.first(), Some(&500));
        assert_eq!(inputs.last(), Some(&539));

        let trims: Vec<f32> = frames.iter().map(|f| f.trimmed_sail_angle).collect();
        assert!((trims[518] - 45.0).abs() < 1e-4, "trim before easing {}", trims[518]);
        assert!((trims[529] - 50.0).abs() < 1e-4, "trim after easing {}", trims[529]);
        assert_eq!(frames[100].tack, WireTack::Starboard);
        Ok(())
    }

    #[test]
    fn host_matches_direct_model_stepping() -> Result<()> {
        let path = temp_recording();
        let cfg = scenario(path.clone())?;
        let expected = replay_by_hand(&cfg);

        let mut app = build_sim_app(cfg)?;
        run_ticks(&mut app, TICKS);
        drop(app);
        let recorded = telemetry_frames(&read_recording(&path)?);
        std::fs::remove_file(&path)?;

        assert_eq!(recorded.len(), expected.len());
        for (got, want) in recorded.iter().zip(&expected) {
            assert_eq!(got, want, "divergence at tick {}", want.tick);
        }
        Ok(())
    }

    /// Drive the app through `update()` with a fixed frame time until it
    /// asks to exit. Returns the final tick and the recording.
    fn run_paced(ticks: u64, frame: Duration) -> Result<(u64, Vec<Message>)> {
        let path = temp_recording();
        let mut cfg = Config::default();
        cfg.ticks = ticks;
        cfg.record = Some(path.clone());
        let mut app: App = build_sim_app(cfg)?;
        app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
        app.finish();
        app.cleanup();

        let mut updates = 0;
        while app.should_exit().is_none() {
            app.update();
            updates += 1;
            assert!(updates < 1000, "fixed schedule never reached the last tick");
        }
        // Extra frames after the exit request must not move the sim.
        for _ in 0..3 {
            app.update();
        }
        let tick = app.world().resource::<SimClock>().tick;
        drop(app);

        let msgs = read_recording(&path)?;
        std::fs::remove_file(&path)?;
        Ok((tick, msgs))
    }

    fn assert_ends_cleanly(ticks: u64, tick: u64, msgs: &[Message]) {
        assert_eq!(tick, ticks, "clock ran past the configured tick count");
        let finished = msgs
            .iter()
            .position(|m| matches!(m, Message::Finished { .. }))
            .expect("recording has a Finished frame");
        assert_eq!(finished, msgs.len() - 1, "{} frames after Finished", msgs.len() - 1 - finished);
        assert_eq!(telemetry_frames(msgs).len() as u64, ticks);
    }

    #[test]
    fn paced_updates_stop_on_the_last_tick() -> Result<()> {
        let (tick, msgs) = run_paced(120, Duration::from_secs_f32(1.0 / 60.0))?;
        assert_ends_cleanly(120, tick, &msgs);
        Ok(())
    }

    #[test]
    fn catch_up_frames_do_not_overrun_the_run() -> Result<()> {
        // Each frame covers three fixed steps; ten ticks is not a multiple.
        let (tick, msgs) = run_paced(10, Duration::from_secs_f32(3.0 / 60.0))?;
        assert_ends_cleanly(10, tick, &msgs);
        Ok(())
    }
}
