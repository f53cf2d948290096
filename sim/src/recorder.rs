use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::Resource;
use protocol::{write_frame, ControlFrame, Message, TelemetryFrame, WireTack};
use sailing::{BoatInputs, BoatTelemetry, Tack, VesselBody};
use tracing::warn;
use uuid::Uuid;

/// Optional telemetry recording. A failed write disables the recorder; the
/// run itself carries on.
#[derive(Resource)]
pub struct Recorder {
    pub run_id: Uuid,
    sink: Option<BufWriter<File>>,
    frames: u64,
}

impl Recorder {
    pub fn disabled() -> Self {
        Self { run_id: Uuid::new_v4(), sink: None, frames: 0 }
    }

    pub fn create(path: &Path, tick_hz: f32, boat: &str) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("creating recording {}", path.display()))?;
        let mut rec = Self { run_id: Uuid::new_v4(), sink: Some(BufWriter::new(file)), frames: 0 };
        let hello = Message::Hello { run_id: rec.run_id, tick_hz, boat: boat.to_string() };
        if let Some(w) = rec.sink.as_mut() {
            write_frame(w, &hello).context("writing recording header")?;
        }
        rec.frames = 1;
        Ok(rec)
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn record(&mut self, msg: &Message) {
        let Some(w) = self.sink.as_mut() else {
            return;
        };
        match write_frame(w, msg) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                warn!(error = %e, frames = self.frames, "telemetry recording failed; disabling recorder");
                self.sink = None;
            }
        }
    }

    pub fn flush(&mut self) {
        if let Some(w) = self.sink.as_mut() {
            if let Err(e) = w.flush() {
                warn!(error = %e, "flushing telemetry recording failed");
                self.sink = None;
            }
        }
    }
}

pub fn control_frame(inputs: BoatInputs) -> ControlFrame {
    ControlFrame {
        trim_in: inputs.trim_in,
        trim_out: inputs.trim_out,
        turn_left: inputs.turn_left,
        turn_right: inputs.turn_right,
    }
}

pub fn telemetry_frame(tick: u64, body: &VesselBody, t: &BoatTelemetry) -> TelemetryFrame {
    TelemetryFrame {
        tick,
        position: t.position.to_array(),
        velocity: body.velocity.to_array(),
        heading: t.heading,
        cog: t.cog,
        sog: t.sog,
        awa: t.awa,
        aws: t.aws,
        tack: match t.tack {
            Tack::Starboard => WireTack::Starboard,
            Tack::Port => WireTack::Port,
        },
        trimmed_sail_angle: t.trimmed_sail_angle,
        sail_angle: t.sail_angle,
        angle_of_attack: t.angle_of_attack,
        lift_coefficient: t.lift_coefficient,
        drag_coefficient: t.drag_coefficient,
        lift_force: t.lift_force.to_array(),
        drag_force: t.drag_force.to_array(),
        drift: t.drift.to_array(),
        anti_drift_force: t.anti_drift_force.to_array(),
        water_drag: t.water_drag.to_array(),
    }
}
