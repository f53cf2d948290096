use serde::{Deserialize, Serialize};

/// Which hull friction curve to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionModel {
    /// `0.5·Cd·A·ρ·s² + 0.3·√s` (Marchaj-style skin friction).
    #[default]
    Marchaj,
    /// Plain quadratic `0.5·c·s²`, `c = 0.2`.
    Approximate,
}

/// Hull resistance parameters for a specific boat class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HullSpec {
    pub wetted_area: f32,
    pub length: f32,
    /// Speed (units/tick) where wave resistance starts climbing steeply.
    pub hull_speed: f32,
    #[serde(default)]
    pub friction_model: FrictionModel,
    /// Drag coefficient along the direction of travel.
    pub cd_forward: f32,
    /// Drag coefficient against sideways slip.
    pub cd_lateral: f32,
    /// Water density term (Marchaj p. 52).
    pub rho: f32,
    /// Linear yaw damping, torque per unit angular velocity.
    pub k_rotation: f32,
}

/// Sail and control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SailSpec {
    /// Lumped sail area / air density factor.
    pub k_aero: f32,
    pub lower_trim_limit_deg: f32,
    pub upper_trim_limit_deg: f32,
    pub initial_trim_deg: f32,
    /// Degrees per trim-in/trim-out press.
    pub trim_step_deg: f32,
    /// Torque added per tick while a turn input is held.
    pub rudder_torque: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatSpec {
    pub mass: f32,
    pub hull: HullSpec,
    pub sail: SailSpec,
}

impl BoatSpec {
    /// Panics on parameters no boat can be built from.
    pub fn validate(&self) {
        assert!(self.mass > 0.0, "mass must be positive, got {}", self.mass);
        assert!(self.hull.hull_speed > 0.0, "hull speed must be positive, got {}", self.hull.hull_speed);
        assert!(self.hull.wetted_area > 0.0, "wetted area must be positive, got {}", self.hull.wetted_area);
        assert!(
            self.sail.lower_trim_limit_deg <= self.sail.upper_trim_limit_deg,
            "trim limits inverted: lower={} upper={}",
            self.sail.lower_trim_limit_deg,
            self.sail.upper_trim_limit_deg
        );
        assert!(
            (self.sail.lower_trim_limit_deg..=self.sail.upper_trim_limit_deg)
                .contains(&self.sail.initial_trim_deg),
            "initial trim {} outside [{}, {}]",
            self.sail.initial_trim_deg,
            self.sail.lower_trim_limit_deg,
            self.sail.upper_trim_limit_deg
        );
        assert!(self.sail.trim_step_deg > 0.0, "trim step must be positive, got {}", self.sail.trim_step_deg);
    }

    pub fn displacement(&self) -> f32 {
        self.hull.wetted_area * self.hull.length
    }
}

pub mod boatspecs {
    use super::*;

    // Cruising keelboat tuned for per-tick units (speeds ~1-4 units/tick).
    pub fn keelboat_spec() -> BoatSpec {
        BoatSpec {
            mass: 50.0,
            hull: HullSpec {
                wetted_area: 20.0, // m^2
                length: 8.0,
                hull_speed: 4.0,
                friction_model: FrictionModel::Marchaj,
                cd_forward: 0.0001,
                cd_lateral: 0.01,
                rho: 52.0,
                k_rotation: 0.3,
            },
            sail: SailSpec {
                k_aero: 0.01,
                lower_trim_limit_deg: 15.0,
                upper_trim_limit_deg: 90.0,
                initial_trim_deg: 45.0,
                trim_step_deg: 0.5,
                rudder_torque: 0.01,
            },
        }
    }

    // Light, twitchy dinghy: less mass, shorter hull, earlier wave wall.
    pub fn dinghy_spec() -> BoatSpec {
        let mut spec = keelboat_spec();
        spec.mass = 15.0;
        spec.hull.wetted_area = 6.0;
        spec.hull.length = 4.0;
        spec.hull.hull_speed = 2.5;
        spec.hull.k_rotation = 0.2;
        spec.sail.lower_trim_limit_deg = 10.0;
        spec.sail.rudder_torque = 0.006;
        spec
    }
}
