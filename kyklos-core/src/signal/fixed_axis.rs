//! Fixed-axis strategy

use crate::sample::{Vec3, STANDARD_GRAVITY};

use super::vertical::VerticalSignal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensor axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Sensor X axis
    X,
    /// Sensor Y axis
    Y,
    /// Sensor Z axis
    #[default]
    Z,
}

/// Takes one fixed sensor axis of the linear acceleration
///
/// Cheaper than projection but assumes the wearer keeps the chosen axis
/// roughly aligned with the motion. Output is normalized to g so the
/// threshold configuration is shared with the projection strategy.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedAxis {
    axis: Axis,
}

impl FixedAxis {
    /// Create a strategy reading the given axis
    pub const fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// The configured axis
    pub const fn axis(&self) -> Axis {
        self.axis
    }
}

impl VerticalSignal for FixedAxis {
    fn vertical_g(&self, gravity: Vec3, sample: Vec3) -> f32 {
        let linear = sample.sub(&gravity);
        let component = match self.axis {
            Axis::X => linear.x,
            Axis::Y => linear.y,
            Axis::Z => linear.z,
        };
        component / STANDARD_GRAVITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_selected_axis() {
        let gravity = Vec3::new(0.0, 0.0, STANDARD_GRAVITY);
        let sample = Vec3::new(1.0, 2.0, STANDARD_GRAVITY + 3.0);

        let x = FixedAxis::new(Axis::X).vertical_g(gravity, sample);
        let y = FixedAxis::new(Axis::Y).vertical_g(gravity, sample);
        let z = FixedAxis::new(Axis::Z).vertical_g(gravity, sample);

        assert!(libm::fabsf(x - 1.0 / STANDARD_GRAVITY) < 1e-6);
        assert!(libm::fabsf(y - 2.0 / STANDARD_GRAVITY) < 1e-6);
        assert!(libm::fabsf(z - 3.0 / STANDARD_GRAVITY) < 1e-6);
    }

    #[test]
    fn test_axis_reports_selection() {
        assert_eq!(FixedAxis::new(Axis::Y).axis(), Axis::Y);
        assert_eq!(FixedAxis::default().axis(), Axis::Z);
    }

    #[test]
    fn test_output_in_g_units() {
        let gravity = Vec3::new(0.0, 0.0, STANDARD_GRAVITY);
        // Half a g of extra acceleration on Z
        let sample = Vec3::new(0.0, 0.0, STANDARD_GRAVITY * 1.5);
        let v = FixedAxis::new(Axis::Z).vertical_g(gravity, sample);
        assert!(libm::fabsf(v - 0.5) < 1e-4);
    }

    #[test]
    fn test_other_axes_ignored() {
        let gravity = Vec3::new(0.0, 0.0, STANDARD_GRAVITY);
        let sample = Vec3::new(5.0, -5.0, STANDARD_GRAVITY);
        let v = FixedAxis::new(Axis::Z).vertical_g(gravity, sample);
        assert_eq!(v, 0.0);
    }
}
