pub use bevy_math::Vec2;

/// Below this magnitude a vector has no usable direction.
pub const DIRECTION_EPSILON: f32 = 1e-3;

#[inline]
pub fn vector_length(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / std::f32::consts::PI
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Compass bearing of a world vector: 0° = north (screen up, −Y), clockwise
/// positive. Argument order is `atan2(x, -y)`, not the usual `atan2(y, x)`.
#[inline]
pub fn geographic_angle(v: Vec2) -> f32 {
    wrap_degrees(rad_to_deg(v.x.atan2(-v.y)))
}

/// Bow unit vector for a body orientation (radians, 0 = north, clockwise).
#[inline]
pub fn heading_unit(orientation: f32) -> Vec2 {
    let (s, c) = orientation.sin_cos();
    Vec2::new(s, -c)
}

#[inline]
pub fn round_to_tenth(x: f32) -> f32 {
    (x * 10.0).round() / 10.0
}
