mod types;
mod navigation;
mod sail;
mod hull;
mod dynamics;

pub use types::{BoatInputs, BoatStepDebug, BoatTelemetry, Tack};
pub use sail::{lift_coefficient, sail_drag_coefficient, SailTrim};
pub use dynamics::{step_boat, step_boat_dbg, Boat};
