use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use bevy::prelude::Resource;
use sailing::{boatspecs, BoatInputs, BoatSpec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoatPreset {
    #[default]
    Keelboat,
    Dinghy,
}

impl BoatPreset {
    pub fn spec(self) -> BoatSpec {
        match self {
            BoatPreset::Keelboat => boatspecs::keelboat_spec(),
            BoatPreset::Dinghy => boatspecs::dinghy_spec(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoatPreset::Keelboat => "keelboat",
            BoatPreset::Dinghy => "dinghy",
        }
    }
}

/// Host-side rigid body settings (the integrator owns these, not the model).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Rotational inertia for the yaw integrator.
    pub inertia: f32,
    pub heading_deg: f32,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self { inertia: 10.0, heading_deg: 0.0, position: [0.0, 0.0], velocity: [0.0, 0.0] }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindShift {
    pub at_tick: u64,
    pub tws: f32,
    pub gwd: f32,
}

/// True wind as speed + direction it blows from, with optional timed shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    pub tws: f32,
    pub gwd: f32,
    pub shifts: Vec<WindShift>,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self { tws: 6.0, gwd: 90.0, shifts: Vec::new() }
    }
}

/// Inputs held for ticks in `[from_tick, to_tick)`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlWindow {
    pub from_tick: u64,
    pub to_tick: u64,
    pub trim_in: bool,
    pub trim_out: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl ControlWindow {
    pub fn covers(&self, tick: u64) -> bool {
        (self.from_tick..self.to_tick).contains(&tick)
    }

    pub fn inputs(&self) -> BoatInputs {
        BoatInputs {
            trim_in: self.trim_in,
            trim_out: self.trim_out,
            turn_left: self.turn_left,
            turn_right: self.turn_right,
        }
    }
}

#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_hz: f32,
    /// Stop after this many ticks.
    pub ticks: u64,
    /// Emit a telemetry log line every N ticks (0 disables).
    pub log_every: u64,
    /// Optional path for a bincode telemetry recording.
    pub record: Option<PathBuf>,
    pub boat: BoatPreset,
    /// Full parameter set; overrides `boat` when present.
    pub boat_spec: Option<BoatSpec>,
    pub body: BodyConfig,
    pub wind: WindConfig,
    pub controls: Vec<ControlWindow>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            ticks: 3600,
            log_every: 60,
            record: None,
            boat: BoatPreset::Keelboat,
            boat_spec: None,
            body: BodyConfig::default(),
            wind: WindConfig::default(),
            controls: Vec::new(),
        }
    }
}

impl Config {
    pub fn boat_spec(&self) -> BoatSpec {
        self.boat_spec.clone().unwrap_or_else(|| self.boat.spec())
    }

    pub fn boat_name(&self) -> &str {
        if self.boat_spec.is_some() {
            "custom"
        } else {
            self.boat.name()
        }
    }

    /// Reject anything the model would refuse to construct.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.tick_hz > 0.0, "tick_hz must be positive (got {})", self.tick_hz);
        ensure!(self.ticks > 0, "ticks must be at least 1");
        ensure!(self.body.inertia > 0.0, "body.inertia must be positive (got {})", self.body.inertia);
        ensure!(self.body.heading_deg.is_finite(), "body.heading_deg must be finite");
        ensure!(
            self.body.position.iter().chain(&self.body.velocity).all(|v| v.is_finite()),
            "body.position and body.velocity must be finite"
        );
        ensure!(self.wind.tws >= 0.0, "wind.tws must not be negative (got {})", self.wind.tws);
        ensure!(
            self.wind.tws.is_finite() && self.wind.gwd.is_finite(),
            "wind must be finite (tws {}, gwd {})",
            self.wind.tws,
            self.wind.gwd
        );
        for shift in &self.wind.shifts {
            ensure!(shift.tws >= 0.0, "wind shift at tick {} has negative tws {}", shift.at_tick, shift.tws);
            ensure!(
                shift.tws.is_finite() && shift.gwd.is_finite(),
                "wind shift at tick {} is not finite (tws {}, gwd {})",
                shift.at_tick,
                shift.tws,
                shift.gwd
            );
        }
        for (i, w) in self.controls.iter().enumerate() {
            ensure!(w.from_tick <= w.to_tick, "controls[{}]: from_tick {} after to_tick {}", i, w.from_tick, w.to_tick);
        }

        let spec = self.boat_spec();
        let coefficients = [
            ("mass", spec.mass),
            ("hull.wetted_area", spec.hull.wetted_area),
            ("hull.length", spec.hull.length),
            ("hull.hull_speed", spec.hull.hull_speed),
            ("hull.cd_forward", spec.hull.cd_forward),
            ("hull.cd_lateral", spec.hull.cd_lateral),
            ("hull.rho", spec.hull.rho),
            ("hull.k_rotation", spec.hull.k_rotation),
            ("sail.k_aero", spec.sail.k_aero),
            ("sail.lower_trim_limit_deg", spec.sail.lower_trim_limit_deg),
            ("sail.upper_trim_limit_deg", spec.sail.upper_trim_limit_deg),
            ("sail.initial_trim_deg", spec.sail.initial_trim_deg),
            ("sail.trim_step_deg", spec.sail.trim_step_deg),
            ("sail.rudder_torque", spec.sail.rudder_torque),
        ];
        for (name, value) in coefficients {
            ensure!(value.is_finite(), "boat spec {} must be finite (got {})", name, value);
        }
        ensure!(spec.mass > 0.0, "boat mass must be positive (got {})", spec.mass);
        ensure!(spec.hull.hull_speed > 0.0, "hull speed must be positive (got {})", spec.hull.hull_speed);
        ensure!(spec.hull.wetted_area > 0.0, "wetted area must be positive (got {})", spec.hull.wetted_area);
        ensure!(
            spec.sail.lower_trim_limit_deg <= spec.sail.upper_trim_limit_deg,
            "trim limits inverted ({} > {})",
            spec.sail.lower_trim_limit_deg,
            spec.sail.upper_trim_limit_deg
        );
        ensure!(
            (spec.sail.lower_trim_limit_deg..=spec.sail.upper_trim_limit_deg).contains(&spec.sail.initial_trim_deg),
            "initial trim {} outside trim limits",
            spec.sail.initial_trim_deg
        );
        ensure!(spec.sail.trim_step_deg > 0.0, "trim step must be positive (got {})", spec.sail.trim_step_deg);
        Ok(())
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text).context("invalid simulation config")?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading config {}", path.display()))
}
