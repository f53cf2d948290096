use super::sail::{lift_coefficient, sail_drag_coefficient, SailTrim};
use super::types::{BoatInputs, BoatStepDebug, BoatTelemetry};
use crate::{BoatSpec, Vec2, VesselBody, Wind};

/// Force model for one vessel: fixed boat parameters plus the two pieces of
/// state it owns (current wind and sail trim). Kinematics live in the
/// host-owned [`VesselBody`].
#[derive(Debug, Clone)]
pub struct Boat {
    pub(super) spec: BoatSpec,
    pub(super) trim: SailTrim,
    pub(super) wind: Wind,
}

impl Boat {
    /// Panics if `spec` fails [`BoatSpec::validate`].
    pub fn new(spec: BoatSpec) -> Self {
        spec.validate();
        let trim = SailTrim::from_spec(&spec.sail);
        Self { spec, trim, wind: Wind::default() }
    }

    pub fn spec(&self) -> &BoatSpec {
        &self.spec
    }

    pub fn wind(&self) -> &Wind {
        &self.wind
    }

    pub fn set_wind(&mut self, vector: Vec2) {
        self.wind.set_wind(vector);
    }

    /// Rudder effect: torque straight into the body's accumulator.
    pub fn apply_torque(&self, body: &mut VesselBody, value: f32) {
        body.add_torque(value);
    }

    /// Translate one tick of control input. Returns the rudder torque applied.
    pub fn apply_controls(&mut self, inputs: BoatInputs, body: &mut VesselBody) -> f32 {
        let step = self.spec.sail.trim_step_deg;
        if inputs.trim_in {
            self.trim_in(step);
        }
        if inputs.trim_out {
            self.trim_out(step);
        }
        let mut tau = 0.0;
        if inputs.turn_right {
            tau += self.spec.sail.rudder_torque;
        }
        if inputs.turn_left {
            tau -= self.spec.sail.rudder_torque;
        }
        if tau != 0.0 {
            self.apply_torque(body, tau);
        }
        tau
    }

    pub fn telemetry(&self, body: &VesselBody) -> BoatTelemetry {
        let aoa = self.angle_of_attack(body);
        BoatTelemetry {
            position: self.position(body),
            heading: self.heading(body),
            cog: self.cog(body),
            sog: self.sog(body),
            awa: self.awa(body),
            aws: self.aws(body),
            tack: self.tack(body),
            trimmed_sail_angle: self.trimmed_sail_angle(),
            sail_angle: self.sail_angle(body),
            angle_of_attack: aoa,
            lift_coefficient: lift_coefficient(aoa),
            drag_coefficient: sail_drag_coefficient(aoa),
            lift_force: self.lift_force(body),
            drag_force: self.drag_force(body),
            drift: self.drift_vector(body),
            anti_drift_force: self.anti_drift_force(body),
            water_drag: self.water_drag_vector(body),
        }
    }
}

/// One tick of the force model: wind update, controls, sail forces, then hull
/// forces. Integration is left to the caller.
pub fn step_boat(boat: &mut Boat, inputs: BoatInputs, wind: Vec2, body: &mut VesselBody) {
    step_boat_dbg(boat, inputs, wind, body, None);
}

/// Variant of `step_boat` that fills out an optional debug breakdown.
pub fn step_boat_dbg(
    boat: &mut Boat,
    inputs: BoatInputs,
    wind: Vec2,
    body: &mut VesselBody,
    mut dbg: Option<&mut BoatStepDebug>,
) {
    let force_before = body.force;
    let torque_before = body.torque;

    boat.set_wind(wind);
    let tau_rudder = boat.apply_controls(inputs, body);

    // Derive everything from the same pre-force body state.
    let telemetry = dbg.is_some().then(|| boat.telemetry(body));
    let tau_damping = boat.anti_rotation_torque(body);

    boat.apply_sail_forces(body);
    boat.apply_friction_forces(body);

    debug_assert!(
        body.force.is_finite() && body.torque.is_finite(),
        "non-finite accumulators after boat step: force={:?} torque={}",
        body.force,
        body.torque
    );

    if let Some(d) = dbg.as_mut() {
        d.inputs = inputs;
        d.wind = wind;
        d.apparent_wind = boat.apparent_wind(body).vector;
        d.telemetry = telemetry.unwrap_or_default();
        d.friction_resistance = boat.friction_resistance(body);
        d.wave_resistance = boat.wave_resistance(body);
        d.tau_rudder = tau_rudder;
        d.tau_damping = tau_damping;
        d.force_total = body.force - force_before;
        d.torque_total = body.torque - torque_before;
    }
}
