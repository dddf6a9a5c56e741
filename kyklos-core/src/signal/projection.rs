//! Gravity-axis projection strategy

use crate::sample::{Vec3, STANDARD_GRAVITY};

use super::vertical::VerticalSignal;

/// Floor applied to the gravity magnitude before dividing by it
pub const MIN_GRAVITY_MAGNITUDE: f32 = 1e-3;

/// Projects linear acceleration onto the current gravity direction
///
/// The component of motion along gravity is the same scalar no matter
/// how the device is worn, which makes this the default strategy. The
/// gravity magnitude divisor is floored so a degenerate estimate can
/// never produce a non-finite signal.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GravityProjection;

impl VerticalSignal for GravityProjection {
    fn vertical_g(&self, gravity: Vec3, sample: Vec3) -> f32 {
        let linear = sample.sub(&gravity);
        let magnitude = gravity.magnitude().max(MIN_GRAVITY_MAGNITUDE);
        linear.dot(&gravity) / magnitude / STANDARD_GRAVITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_device_upward_accel_is_positive() {
        let gravity = Vec3::new(0.0, 0.0, STANDARD_GRAVITY);
        let sample = Vec3::new(0.0, 0.0, STANDARD_GRAVITY * 1.2);
        let v = GravityProjection.vertical_g(gravity, sample);
        assert!(libm::fabsf(v - 0.2) < 1e-4, "got {v}");
    }

    #[test]
    fn test_flat_device_downward_accel_is_negative() {
        let gravity = Vec3::new(0.0, 0.0, STANDARD_GRAVITY);
        let sample = Vec3::new(0.0, 0.0, STANDARD_GRAVITY * 0.7);
        let v = GravityProjection.vertical_g(gravity, sample);
        assert!(libm::fabsf(v + 0.3) < 1e-4, "got {v}");
    }

    #[test]
    fn test_orientation_independent() {
        // Same 0.25 g motion along gravity, three different orientations
        let along_z = Vec3::new(0.0, 0.0, STANDARD_GRAVITY);
        let along_x = Vec3::new(STANDARD_GRAVITY, 0.0, 0.0);
        let tilted = Vec3::new(5.664, 0.0, 8.011); // 45-ish degrees, |g| = 9.81

        for gravity in [along_z, along_x, tilted] {
            let unit = gravity.scale(1.0 / gravity.magnitude());
            let sample = Vec3::new(
                gravity.x + 0.25 * STANDARD_GRAVITY * unit.x,
                gravity.y + 0.25 * STANDARD_GRAVITY * unit.y,
                gravity.z + 0.25 * STANDARD_GRAVITY * unit.z,
            );
            let v = GravityProjection.vertical_g(gravity, sample);
            assert!(libm::fabsf(v - 0.25) < 1e-3, "got {v}");
        }
    }

    #[test]
    fn test_motion_across_gravity_reads_zero() {
        let gravity = Vec3::new(0.0, 0.0, STANDARD_GRAVITY);
        let sample = Vec3::new(2.0, -1.0, STANDARD_GRAVITY);
        let v = GravityProjection.vertical_g(gravity, sample);
        assert!(libm::fabsf(v) < 1e-5, "got {v}");
    }

    #[test]
    fn test_degenerate_gravity_stays_finite() {
        let gravity = Vec3::ZERO;
        let sample = Vec3::new(0.0, 0.0, 50.0);
        let v = GravityProjection.vertical_g(gravity, sample);
        assert!(v.is_finite());
        assert_eq!(v, 0.0); // zero gravity projects nothing
    }
}
