//! Signal conditioning filters
//!
//! Gravity separation and scalar smoothing for the raw
//! accelerometer stream.

pub mod gravity;
pub mod smoothing;

pub use gravity::GravityFilter;
pub use smoothing::SignalSmoother;
