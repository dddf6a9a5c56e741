//! Gravity estimation via exponential low-pass filtering
//!
//! Separates the slow-moving gravity component from raw readings so the
//! rest of the pipeline can work on linear acceleration. The estimate
//! tracks wear orientation as the wrist moves.

use crate::sample::Vec3;

/// Low-pass gravity estimator
///
/// Holds no coefficients of its own; the blend factor comes from the
/// active configuration on every update so a configuration swap takes
/// effect on the next sample.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GravityFilter {
    estimate: Option<Vec3>,
}

impl GravityFilter {
    /// Create a filter with no estimate yet
    pub const fn new() -> Self {
        Self { estimate: None }
    }

    /// Current gravity estimate, if the filter has seen a sample
    pub fn estimate(&self) -> Option<Vec3> {
        self.estimate
    }

    /// Check whether the first sample has been absorbed
    pub fn is_initialized(&self) -> bool {
        self.estimate.is_some()
    }

    /// Fold one raw sample into the estimate and return the new estimate
    ///
    /// `alpha` is the trust placed in the prior estimate, in (0, 1).
    /// The very first sample becomes the estimate directly, so the
    /// linear acceleration derived from that sample is exactly zero.
    pub fn update(&mut self, sample: Vec3, alpha: f32) -> Vec3 {
        let next = match self.estimate {
            None => sample,
            Some(prev) => Vec3::new(
                alpha * prev.x + (1.0 - alpha) * sample.x,
                alpha * prev.y + (1.0 - alpha) * sample.y,
                alpha * prev.z + (1.0 - alpha) * sample.z,
            ),
        };
        self.estimate = Some(next);
        next
    }

    /// Discard the estimate; the next sample cold-starts the filter again
    pub fn reset(&mut self) {
        self.estimate = None;
    }
}
