//! Timestamped accelerometer readings

use super::vec3::Vec3;

/// One standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.81;

/// A single timestamped accelerometer reading
///
/// Axis values are raw readings in m/s² and still include gravity.
/// Timestamps come from the caller's monotonic millisecond clock;
/// the detector never reads a clock itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    /// Raw acceleration including gravity (m/s²)
    pub accel: Vec3,
    /// Monotonic timestamp in milliseconds
    pub timestamp_ms: u64,
}

impl AccelSample {
    /// Create a sample from raw axis readings
    pub const fn new(x: f32, y: f32, z: f32, timestamp_ms: u64) -> Self {
        Self {
            accel: Vec3::new(x, y, z),
            timestamp_ms,
        }
    }

    /// Check that every axis value is a real number
    ///
    /// Samples failing this check are dropped at the pipeline boundary.
    pub fn is_finite(&self) -> bool {
        self.accel.is_finite()
    }
}
