//! Scalar motion-signal strategies
//!
//! Two interchangeable ways to collapse a 3-axis linear acceleration
//! into the single scalar the threshold machine consumes. Both report
//! in units of standard gravity so one threshold table serves either.

pub mod fixed_axis;
pub mod projection;
pub mod vertical;

pub use fixed_axis::{Axis, FixedAxis};
pub use projection::{GravityProjection, MIN_GRAVITY_MAGNITUDE};
pub use vertical::{SignalMode, VerticalSignal};
