use serde::{Deserialize, Serialize};

use super::dynamics::Boat;
use super::navigation::tack_for_awa;
use super::types::Tack;
use crate::{SailSpec, Vec2, VesselBody};

/// Pilot-commanded sail trim, always within its limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SailTrim {
    trimmed_sail_angle_deg: f32,
    lower_limit_deg: f32,
    upper_limit_deg: f32,
}

impl SailTrim {
    pub fn new(initial_deg: f32, lower_limit_deg: f32, upper_limit_deg: f32) -> Self {
        assert!(
            lower_limit_deg <= upper_limit_deg,
            "trim limits inverted: lower={} upper={}",
            lower_limit_deg,
            upper_limit_deg
        );
        Self {
            trimmed_sail_angle_deg: initial_deg.clamp(lower_limit_deg, upper_limit_deg),
            lower_limit_deg,
            upper_limit_deg,
        }
    }

    pub fn from_spec(spec: &SailSpec) -> Self {
        Self::new(spec.initial_trim_deg, spec.lower_trim_limit_deg, spec.upper_trim_limit_deg)
    }

    pub fn angle(&self) -> f32 {
        self.trimmed_sail_angle_deg
    }

    /// Sheet in: smaller angle to the centerline, never below the lower limit.
    pub fn trim_in(&mut self, step: f32) {
        self.trimmed_sail_angle_deg = (self.trimmed_sail_angle_deg - step).max(self.lower_limit_deg);
    }

    /// Ease out: larger angle to the centerline, never above the upper limit.
    pub fn trim_out(&mut self, step: f32) {
        self.trimmed_sail_angle_deg = (self.trimmed_sail_angle_deg + step).min(self.upper_limit_deg);
    }
}

/// Lift coefficient for an angle of attack in degrees.
///
/// Two downward parabolas meeting at the 1.5 peak at 32°; no lift at or below
/// 11° (luffing) or past 90° (stalled).
pub fn lift_coefficient(aoa: f32) -> f32 {
    if aoa > 11.0 && aoa <= 32.0 {
        -(1.0 / 300.0) * (aoa - 32.0).powi(2) + 1.5
    } else if aoa > 32.0 && aoa <= 90.0 {
        -(1.3 / 3364.0) * (aoa - 32.0).powi(2) + 1.5
    } else {
        0.0
    }
}

/// Sail drag coefficient for an angle of attack in degrees.
///
/// Upward-opening curves peaking at 90°, where the sail is square to the flow.
pub fn sail_drag_coefficient(aoa: f32) -> f32 {
    const A: f32 = 1.35 / 6400.0;
    if (0.0..=11.0).contains(&aoa) {
        0.11
    } else if aoa > 11.0 && aoa <= 90.0 {
        A * (aoa - 10.0).powi(2) + 0.15
    } else if aoa > 90.0 && aoa <= 170.0 {
        A * (aoa - 170.0).powi(2) + 0.15
    } else {
        0.0
    }
}

impl Boat {
    pub fn trim(&self) -> &SailTrim {
        &self.trim
    }

    pub fn trimmed_sail_angle(&self) -> f32 {
        self.trim.angle()
    }

    pub fn trim_in(&mut self, step: f32) {
        self.trim.trim_in(step);
    }

    pub fn trim_out(&mut self, step: f32) {
        self.trim.trim_out(step);
    }

    /// Sail angle to the centerline, positive to port (starboard tack) and
    /// negative to starboard (port tack). When the commanded trim is tighter
    /// than the wind allows the sail luffs at the wind's own angle.
    pub fn sail_angle(&self, body: &VesselBody) -> f32 {
        let awa = self.awa(body);
        sail_angle_for(awa, tack_for_awa(awa), self.trim.angle())
    }

    /// Angle between apparent wind and sail chord, never negative.
    pub fn angle_of_attack(&self, body: &VesselBody) -> f32 {
        let awa = self.awa(body);
        let tack = tack_for_awa(awa);
        let sail = sail_angle_for(awa, tack, self.trim.angle());
        (signed_awa(awa, tack) - sail).abs()
    }

    pub fn lift_unit_vector(&self, body: &VesselBody) -> Vec2 {
        let aw = self.apparent_wind(body);
        let u = aw.unit;
        match self.tack(body) {
            Tack::Starboard => Vec2::new(-u.y, u.x),
            Tack::Port => Vec2::new(u.y, -u.x),
        }
    }

    /// Drag acts along the apparent wind.
    pub fn drag_unit_vector(&self, body: &VesselBody) -> Vec2 {
        self.apparent_wind(body).unit
    }

    pub fn lift_force(&self, body: &VesselBody) -> Vec2 {
        let cl = lift_coefficient(self.angle_of_attack(body));
        self.dynamic_pressure(body) * cl * self.lift_unit_vector(body)
    }

    pub fn drag_force(&self, body: &VesselBody) -> Vec2 {
        let cd = sail_drag_coefficient(self.angle_of_attack(body));
        self.dynamic_pressure(body) * cd * self.drag_unit_vector(body)
    }

    pub fn apply_sail_forces(&self, body: &mut VesselBody) {
        let lift = self.lift_force(body);
        let drag = self.drag_force(body);
        body.add_force(lift);
        body.add_force(drag);
    }

    // k · AWS²; uses the unrounded apparent speed.
    fn dynamic_pressure(&self, body: &VesselBody) -> f32 {
        let aws = self.apparent_wind(body).speed;
        self.spec.sail.k_aero * aws * aws
    }
}

fn sail_angle_for(awa: f32, tack: Tack, trim: f32) -> f32 {
    match tack {
        Tack::Starboard => {
            if awa >= trim {
                trim
            } else {
                awa
            }
        }
        Tack::Port => {
            if 360.0 - awa >= trim {
                -trim
            } else {
                awa - 360.0
            }
        }
    }
}

// Port tack covers AWA in [180, 360), so dead astern maps to −180 there.
fn signed_awa(awa: f32, tack: Tack) -> f32 {
    match tack {
        Tack::Starboard => awa,
        Tack::Port => awa - 360.0,
    }
}
