//! Detector configuration
//!
//! All tunables for the detection pipeline in one plain, copyable
//! struct. The detector consults the active configuration once per
//! sample, so a replacement takes effect on the next sample and never
//! re-evaluates the phase in progress.

use crate::signal::SignalMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reasons a configuration fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A smoothing coefficient is outside (0, 1)
    AlphaOutOfRange,
    /// Sensitivity is zero, negative, or not finite
    BadSensitivity,
    /// Down threshold must be negative and the up threshold positive
    BadThresholds,
    /// Neutral band must be non-negative and finite
    BadNeutralBand,
}

/// Tunable parameters for the rep detector
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectorConfig {
    /// Threshold scale; higher demands stronger motion to count
    pub sensitivity: f32,
    /// Scalar-signal strategy
    pub signal: SignalMode,
    /// Trust placed in the prior gravity estimate, in (0, 1)
    pub gravity_alpha: f32,
    /// Fast EMA coefficient for the motion signal, in (0, 1)
    pub smoothing_alpha: f32,
    /// Slow drift-baseline coefficient; None disables the baseline
    pub baseline_alpha: Option<f32>,
    /// Base descent threshold in g before sensitivity scaling (negative)
    pub down_threshold_g: f32,
    /// Base rise threshold in g before sensitivity scaling (positive)
    pub up_threshold_g: f32,
    /// Half-width of the neutral band around zero (g)
    pub neutral_band_g: f32,
    /// Minimum time below the descent threshold before a rep can count (ms)
    pub min_hold_ms: u32,
    /// Minimum spacing between counted reps (ms)
    pub debounce_ms: u32,
    /// Abandon a descent that has settled in the neutral band this long (ms)
    pub neutral_timeout_ms: u32,
    /// Absolute cap on one descent-to-rise cycle (ms)
    pub max_down_ms: u32,
    /// Whether reset() also discards the gravity estimate
    pub reset_clears_gravity: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.55,
            signal: SignalMode::Projection,
            gravity_alpha: 0.85,
            smoothing_alpha: 0.25,
            baseline_alpha: Some(0.02),
            down_threshold_g: -0.32,
            up_threshold_g: 0.20,
            neutral_band_g: 0.07,
            min_hold_ms: 120,
            debounce_ms: 600,
            neutral_timeout_ms: 1500,
            max_down_ms: 2500,
            reset_clears_gravity: false,
        }
    }
}

impl DetectorConfig {
    /// Effective descent threshold after sensitivity scaling (negative)
    pub fn down_threshold(&self) -> f32 {
        self.down_threshold_g * self.sensitivity
    }

    /// Effective rise threshold after sensitivity scaling (positive)
    pub fn up_threshold(&self) -> f32 {
        self.up_threshold_g * self.sensitivity
    }

    /// Check the configuration for values the pipeline cannot use
    ///
    /// The detector itself never rejects a configuration; callers that
    /// accept user input should validate before applying.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !alpha_ok(self.gravity_alpha) || !alpha_ok(self.smoothing_alpha) {
            return Err(ConfigError::AlphaOutOfRange);
        }
        if let Some(beta) = self.baseline_alpha {
            if !alpha_ok(beta) {
                return Err(ConfigError::AlphaOutOfRange);
            }
        }
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ConfigError::BadSensitivity);
        }
        if !self.down_threshold_g.is_finite()
            || !self.up_threshold_g.is_finite()
            || self.down_threshold_g >= 0.0
            || self.up_threshold_g <= 0.0
        {
            return Err(ConfigError::BadThresholds);
        }
        if !self.neutral_band_g.is_finite() || self.neutral_band_g < 0.0 {
            return Err(ConfigError::BadNeutralBand);
        }
        Ok(())
    }
}

fn alpha_ok(alpha: f32) -> bool {
    alpha.is_finite() && alpha > 0.0 && alpha < 1.0
}
