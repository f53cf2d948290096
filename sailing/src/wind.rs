use serde::{Deserialize, Serialize};

use crate::math::{deg_to_rad, geographic_angle, vector_length, wrap_degrees, DIRECTION_EPSILON};
use crate::Vec2;

/// Uniform world-frame wind. The vector points where the air is going.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Wind {
    pub vector: Vec2,
}

impl Wind {
    pub const fn new(vector: Vec2) -> Self {
        Self { vector }
    }

    /// Build from true wind speed and ground wind direction, where `gwd_deg`
    /// is the compass bearing the wind blows *from*.
    pub fn from_true(tws: f32, gwd_deg: f32) -> Self {
        let (s, c) = deg_to_rad(gwd_deg).sin_cos();
        // Blowing toward gwd + 180; north is −Y.
        Self::new(Vec2::new(-s * tws, c * tws))
    }

    pub fn set_wind(&mut self, vector: Vec2) {
        self.vector = vector;
    }

    pub fn true_wind_speed(&self) -> f32 {
        vector_length(self.vector)
    }

    /// Compass bearing the wind comes from. 0 for calm air.
    pub fn true_wind_direction(&self) -> f32 {
        if self.true_wind_speed() < DIRECTION_EPSILON {
            return 0.0;
        }
        wrap_degrees(geographic_angle(self.vector) + 180.0)
    }

    /// Wind as felt aboard a hull moving at `velocity`.
    pub fn apparent(&self, velocity: Vec2) -> ApparentWind {
        ApparentWind::from_vector(self.vector - velocity)
    }
}

/// Apparent wind with the calm-air guard already applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApparentWind {
    pub vector: Vec2,
    /// Magnitude of `vector`, or exactly 0 when below the direction epsilon.
    pub speed: f32,
    /// Unit vector along `vector`, or zero when `speed` is 0.
    pub unit: Vec2,
}

impl ApparentWind {
    pub fn from_vector(vector: Vec2) -> Self {
        let len = vector_length(vector);
        if len < DIRECTION_EPSILON {
            return Self { vector, speed: 0.0, unit: Vec2::ZERO };
        }
        Self { vector, speed: len, unit: vector / len }
    }

    pub fn is_calm(&self) -> bool {
        self.speed == 0.0
    }
}
