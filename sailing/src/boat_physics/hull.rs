use super::dynamics::Boat;
use crate::math::{heading_unit, vector_length, DIRECTION_EPSILON};
use crate::{FrictionModel, HullSpec, Vec2, VesselBody};

// ----- Resistance magnitudes -----

/// Quadratic skin friction plus a small √s term for low speeds.
pub(super) fn quadratic_drag(cd: f32, area: f32, rho: f32, speed: f32) -> f32 {
    0.5 * cd * area * rho * speed * speed + 0.3 * speed.sqrt()
}

pub(super) fn friction_resistance_at(hull: &HullSpec, speed: f32) -> f32 {
    match hull.friction_model {
        FrictionModel::Marchaj => quadratic_drag(hull.cd_forward, hull.wetted_area, hull.rho, speed),
        FrictionModel::Approximate => 0.5 * speed * speed * 0.2,
    }
}

/// Wave-making "wall" around hull speed.
pub(super) fn wave_resistance_at(hull: &HullSpec, speed: f32) -> f32 {
    (speed / hull.hull_speed).powi(5) + 3.0_f32.powf(speed - hull.hull_speed)
}

impl Boat {
    pub fn friction_resistance(&self, body: &VesselBody) -> f32 {
        friction_resistance_at(&self.spec.hull, vector_length(body.velocity))
    }

    pub fn wave_resistance(&self, body: &VesselBody) -> f32 {
        wave_resistance_at(&self.spec.hull, vector_length(body.velocity))
    }

    /// Combined friction and wave resistance, opposing the velocity. Zero
    /// when the hull has no direction of travel.
    pub fn water_drag_vector(&self, body: &VesselBody) -> Vec2 {
        if vector_length(body.velocity) < DIRECTION_EPSILON {
            return Vec2::ZERO;
        }
        let total = self.friction_resistance(body) + self.wave_resistance(body);
        let angle = body.velocity.y.atan2(body.velocity.x);
        Vec2::new(-total * angle.cos(), -total * angle.sin())
    }

    /// Sideways slip: velocity minus its component along the bow.
    pub fn drift_vector(&self, body: &VesselBody) -> Vec2 {
        let h = heading_unit(body.orientation);
        let along = body.velocity.dot(h);
        body.velocity - along * h
    }

    pub fn drift_speed(&self, body: &VesselBody) -> f32 {
        vector_length(self.drift_vector(body))
    }

    /// Keel resistance against the drift.
    pub fn anti_drift_force(&self, body: &VesselBody) -> Vec2 {
        let drift = self.drift_vector(body);
        let drift_speed = vector_length(drift);
        if drift_speed == 0.0 {
            return Vec2::ZERO;
        }
        let hull = &self.spec.hull;
        let magnitude = quadratic_drag(hull.cd_lateral, hull.wetted_area, hull.rho, drift_speed);
        -(drift / drift_speed) * magnitude
    }

    pub fn anti_rotation_torque(&self, body: &VesselBody) -> f32 {
        -self.spec.hull.k_rotation * body.angular_velocity
    }

    pub fn apply_friction_forces(&self, body: &mut VesselBody) {
        let water_drag = self.water_drag_vector(body);
        let anti_drift = self.anti_drift_force(body);
        let tau = self.anti_rotation_torque(body);
        body.add_force(water_drag);
        body.add_force(anti_drift);
        body.add_torque(tau);
    }

    pub fn displacement(&self) -> f32 {
        self.spec.displacement()
    }
}
