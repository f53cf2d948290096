//! Force and telemetry model for a single sailing vessel.
//!
//! This crate intentionally avoids any ECS or rendering types. The host owns
//! the rigid body and its integrator; the model only reads the body's
//! kinematic state and adds to its force/torque accumulators.

pub mod math;
pub use math::Vec2;

mod body;
pub use body::VesselBody;

pub mod wind;
pub use wind::{ApparentWind, Wind};

mod boat_specs;
pub use boat_specs::boatspecs;
pub use boat_specs::{BoatSpec, FrictionModel, HullSpec, SailSpec};

pub mod boat_physics;
pub use boat_physics::{
    lift_coefficient, sail_drag_coefficient, step_boat, step_boat_dbg, Boat, BoatInputs,
    BoatStepDebug, BoatTelemetry, SailTrim, Tack,
};
