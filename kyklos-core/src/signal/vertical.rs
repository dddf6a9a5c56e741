//! Scalar-signal extraction seam

use crate::sample::Vec3;

use super::fixed_axis::{Axis, FixedAxis};
use super::projection::GravityProjection;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy for collapsing one sample to a scalar motion value
///
/// Implementations subtract the gravity estimate from the raw sample
/// themselves and report the result in g. The sign convention is shared:
/// negative while accelerating into the descent of a rep, positive while
/// driving back up.
pub trait VerticalSignal {
    /// Scalar motion signal for one sample, in g
    fn vertical_g(&self, gravity: Vec3, sample: Vec3) -> f32;
}

/// Selectable signal strategy
///
/// Plain data so it can live inside the detector configuration; the
/// behavior behind each variant is its own type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalMode {
    /// Project linear acceleration onto the gravity direction.
    /// Works in any wear orientation.
    #[default]
    Projection,
    /// Take one fixed sensor axis of the linear acceleration.
    /// Cheaper, but assumes the axis stays aligned with the motion.
    FixedAxis(Axis),
}

impl VerticalSignal for SignalMode {
    fn vertical_g(&self, gravity: Vec3, sample: Vec3) -> f32 {
        match self {
            SignalMode::Projection => GravityProjection.vertical_g(gravity, sample),
            SignalMode::FixedAxis(axis) => FixedAxis::new(*axis).vertical_g(gravity, sample),
        }
    }
}
