//! Step transition engine: a single-step state machine plus the
//! interpolator that turns its progress into draw geometry.

mod curve;
mod params;
mod state;

pub use curve::Curve;
pub use params::{active_params, draw_params, DrawParams, FILL_SPLIT};
pub use state::{normalized_time, Direction, TickResult, TransitionState};
