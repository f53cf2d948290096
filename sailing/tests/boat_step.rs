use sailing::{
    boatspecs::keelboat_spec, step_boat, step_boat_dbg, Boat, BoatInputs, BoatStepDebug, Vec2,
    VesselBody, Wind,
};

const INERTIA: f32 = 10.0;

// Stand-in for the host integrator: per-tick semi-implicit Euler.
fn integrate(body: &mut VesselBody) {
    body.velocity += body.force / body.mass();
    body.position += body.velocity;
    body.angular_velocity += body.torque / INERTIA;
    body.orientation += body.angular_velocity;
    body.clear_accumulators();
}

fn run(boat: &mut Boat, body: &mut VesselBody, wind: Wind, inputs: BoatInputs, ticks: usize) {
    for _ in 0..ticks {
        step_boat(boat, inputs, wind.vector, body);
        integrate(body);
    }
}

fn fresh() -> (Boat, VesselBody) {
    let spec = keelboat_spec();
    let body = VesselBody::new(spec.mass);
    (Boat::new(spec), body)
}

#[test]
fn beam_reach_accelerates_forward() {
    let (mut boat, mut body) = fresh();
    run(&mut boat, &mut body, Wind::from_true(6.0, 90.0), BoatInputs::default(), 600);

    let v = body.velocity;
    assert!(v.y < -0.8, "expected solid northward speed on a beam reach, v={:?}", v);
    assert!(v.x.abs() < v.y.abs(), "leeway should stay small, v={:?}", v);
    assert!(v.x <= 0.0, "leeway should be downwind (west), v={:?}", v);
    let cog = boat.cog(&body);
    assert!(cog > 270.0 || cog < 10.0, "course should be roughly north, cog={}", cog);
    assert!(boat.sog(&body) < keelboat_spec().hull.hull_speed);
}

#[test]
fn in_irons_makes_no_headway() {
    let (mut boat, mut body) = fresh();
    run(&mut boat, &mut body, Wind::from_true(6.0, 0.0), BoatInputs::default(), 400);
    assert!(body.velocity.y > -1e-3, "head to wind must not sail forward, v={:?}", body.velocity);
    assert!(boat.angle_of_attack(&body) < 1e-3);
}

#[test]
fn right_rudder_turns_clockwise() {
    let (mut boat, mut body) = fresh();
    let right = BoatInputs { turn_right: true, ..Default::default() };
    run(&mut boat, &mut body, Wind::default(), right, 100);
    let heading = boat.heading(&body);
    assert!(heading > 5.0 && heading < 180.0, "right rudder should swing the bow east, heading={}", heading);

    let (mut boat, mut body) = fresh();
    let left = BoatInputs { turn_left: true, ..Default::default() };
    run(&mut boat, &mut body, Wind::default(), left, 100);
    let heading = boat.heading(&body);
    assert!(heading > 180.0 && heading < 355.0, "left rudder should swing the bow west, heading={}", heading);
}

#[test]
fn opposite_rudder_inputs_cancel() {
    let (mut boat, mut body) = fresh();
    let both = BoatInputs { turn_left: true, turn_right: true, ..Default::default() };
    let tau = boat.apply_controls(both, &mut body);
    assert_eq!(tau, 0.0);
    assert_eq!(body.torque, 0.0);
}

#[test]
fn trim_inputs_step_the_sheet() {
    let (mut boat, mut body) = fresh();
    let step = keelboat_spec().sail.trim_step_deg;
    let start = boat.trimmed_sail_angle();
    boat.apply_controls(BoatInputs { trim_in: true, ..Default::default() }, &mut body);
    assert_eq!(boat.trimmed_sail_angle(), start - step);
    boat.apply_controls(BoatInputs { trim_out: true, ..Default::default() }, &mut body);
    assert_eq!(boat.trimmed_sail_angle(), start);
    // Held for a long time the sheet stops at the limit.
    for _ in 0..1000 {
        boat.apply_controls(BoatInputs { trim_out: true, ..Default::default() }, &mut body);
    }
    assert_eq!(boat.trimmed_sail_angle(), keelboat_spec().sail.upper_trim_limit_deg);
}

#[test]
fn debug_breakdown_matches_accumulators() {
    let (mut boat, mut body) = fresh();
    body.velocity = Vec2::new(0.4, -1.0);
    body.angular_velocity = 0.02;
    let inputs = BoatInputs { turn_right: true, ..Default::default() };
    let wind = Wind::from_true(8.0, 60.0).vector;

    let mut dbg = BoatStepDebug::default();
    step_boat_dbg(&mut boat, inputs, wind, &mut body, Some(&mut dbg));

    assert!((dbg.force_total - body.force).length() < 1e-6);
    assert!((dbg.torque_total - body.torque).abs() < 1e-7);
    assert!((dbg.tau_rudder + dbg.tau_damping - body.torque).abs() < 1e-7);
    assert_eq!(dbg.inputs, inputs);

    let t = dbg.telemetry;
    let parts = t.lift_force + t.drag_force + t.water_drag + t.anti_drift_force;
    assert!((parts - body.force).length() < 1e-5, "{:?} vs {:?}", parts, body.force);
    assert_eq!(t.tack, boat.tack(&body));
    assert_eq!(t.awa, boat.awa(&body));
}

#[test]
fn wind_is_taken_from_the_step() {
    let (mut boat, mut body) = fresh();
    let wind = Vec2::new(-3.0, 1.0);
    step_boat(&mut boat, BoatInputs::default(), wind, &mut body);
    assert_eq!(boat.wind().vector, wind);
}
