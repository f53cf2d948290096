use super::dynamics::Boat;
use super::types::Tack;
use crate::math::{geographic_angle, rad_to_deg, round_to_tenth, vector_length, wrap_degrees};
use crate::{ApparentWind, Vec2, VesselBody};

/// SOG below this reads as stationary.
const STATIONARY_SOG: f32 = 0.1;

impl Boat {
    /// Bow direction in compass degrees, `[0, 360)`.
    pub fn heading(&self, body: &VesselBody) -> f32 {
        wrap_degrees(rad_to_deg(body.orientation))
    }

    /// Speed over ground, rounded to one decimal.
    pub fn sog(&self, body: &VesselBody) -> f32 {
        round_to_tenth(vector_length(body.velocity))
    }

    pub fn is_stationary(&self, body: &VesselBody) -> bool {
        self.sog(body) < STATIONARY_SOG
    }

    /// Course over ground; falls back to heading when not moving.
    pub fn cog(&self, body: &VesselBody) -> f32 {
        if self.is_stationary(body) {
            return self.heading(body);
        }
        geographic_angle(body.velocity)
    }

    pub fn position(&self, body: &VesselBody) -> Vec2 {
        body.position
    }

    pub fn apparent_wind(&self, body: &VesselBody) -> ApparentWind {
        self.wind.apparent(body.velocity)
    }

    /// Apparent wind speed, rounded to one decimal.
    pub fn aws(&self, body: &VesselBody) -> f32 {
        round_to_tenth(self.apparent_wind(body).speed)
    }

    /// Apparent wind angle off the bow, `[0, 360)`: 0 ahead, 90 starboard
    /// beam, 180 astern, 270 port beam. 0 in calm apparent air.
    pub fn awa(&self, body: &VesselBody) -> f32 {
        let aw = self.apparent_wind(body);
        if aw.is_calm() {
            return 0.0;
        }
        let bearing = wrap_degrees(rad_to_deg(aw.vector.y.atan2(aw.vector.x)));
        // +270 moves the zero from "blowing east" to "coming over the bow".
        wrap_degrees(bearing + 270.0 - self.heading(body))
    }

    pub fn tack(&self, body: &VesselBody) -> Tack {
        tack_for_awa(self.awa(body))
    }
}

#[inline]
pub(super) fn tack_for_awa(awa: f32) -> Tack {
    if awa < 180.0 {
        Tack::Starboard
    } else {
        Tack::Port
    }
}
