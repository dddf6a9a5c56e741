//! Accelerometer sample data model
//!
//! Raw sensor readings and the small amount of vector math
//! the pipeline performs on them.

pub mod accel;
pub mod vec3;

pub use accel::{AccelSample, STANDARD_GRAVITY};
pub use vec3::Vec3;
