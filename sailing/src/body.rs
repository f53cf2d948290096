use crate::Vec2;

/// Rigid-body state shared with the host integrator.
///
/// Frame conventions:
/// - World is screen-like: +X east, +Y south (down), so north is −Y.
/// - `orientation` is the bow direction in radians; 0 points north and
///   positive values turn clockwise (to starboard).
/// - `velocity` and `angular_velocity` are per tick.
///
/// The force model only reads the kinematic fields and adds to `force` and
/// `torque`. Integrating and clearing the accumulators is the host's job.
#[derive(Debug, Clone)]
pub struct VesselBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub orientation: f32,
    pub angular_velocity: f32,
    pub force: Vec2,
    pub torque: f32,
    mass: f32,
}

impl VesselBody {
    pub fn new(mass: f32) -> Self {
        assert!(mass > 0.0, "vessel mass must be positive, got {}", mass);
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            orientation: 0.0,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            mass,
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn add_force(&mut self, f: Vec2) {
        self.force += f;
    }

    #[inline]
    pub fn add_torque(&mut self, tau: f32) {
        self.torque += tau;
    }

    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }
}
