//! Hardware abstraction traits
//!
//! The sensor boundary the detection core sits behind. Device crates
//! and host harnesses implement these; the core itself never touches a
//! bus or a clock.

pub mod accelerometer;

pub use accelerometer::{Accelerometer, SensorError};
