use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Vec2;

/// Side the apparent wind strikes the sail from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tack {
    #[default]
    Starboard,
    Port,
}

impl Tack {
    pub fn as_str(self) -> &'static str {
        match self {
            Tack::Starboard => "starboard",
            Tack::Port => "port",
        }
    }
}

impl fmt::Display for Tack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tick control record from the input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatInputs {
    pub trim_in: bool,
    pub trim_out: bool,
    /// Rudder to port (bow swings counter-clockwise).
    pub turn_left: bool,
    /// Rudder to starboard (bow swings clockwise).
    pub turn_right: bool,
}

/// Read-only navigation and force picture for one body state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoatTelemetry {
    pub position: Vec2,
    pub heading: f32,
    pub cog: f32,
    pub sog: f32,
    pub awa: f32,
    pub aws: f32,
    pub tack: Tack,
    pub trimmed_sail_angle: f32,
    pub sail_angle: f32,
    pub angle_of_attack: f32,
    pub lift_coefficient: f32,
    pub drag_coefficient: f32,
    pub lift_force: Vec2,
    pub drag_force: Vec2,
    pub drift: Vec2,
    pub anti_drift_force: Vec2,
    pub water_drag: Vec2,
}

/// Breakdown of what one `step_boat_dbg` call added to the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoatStepDebug {
    pub inputs: BoatInputs,
    pub wind: Vec2,
    pub apparent_wind: Vec2,
    pub telemetry: BoatTelemetry,
    // Hull resistance magnitudes
    pub friction_resistance: f32,
    pub wave_resistance: f32,
    // Torques
    pub tau_rudder: f32,
    pub tau_damping: f32,
    // Totals added this step
    pub force_total: Vec2,
    pub torque_total: f32,
}
