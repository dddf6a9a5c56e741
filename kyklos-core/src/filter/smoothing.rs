//! Scalar motion-signal smoothing
//!
//! A fast EMA knocks down sample-to-sample jitter. An optional slow
//! baseline tracker follows residual drift so the output stays centered
//! on zero between reps even with a slightly biased sensor.

/// Smoothing state for the scalar motion signal
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalSmoother {
    ema: f32,
    baseline: f32,
}

impl SignalSmoother {
    /// Create a smoother with both accumulators at zero
    pub const fn new() -> Self {
        Self {
            ema: 0.0,
            baseline: 0.0,
        }
    }

    /// Fold one raw scalar in and return the smoothed signal
    ///
    /// `alpha` is the fast EMA coefficient. With `baseline_alpha` set
    /// the output is the fast EMA minus the slow baseline; without it
    /// the output is the fast EMA alone.
    pub fn update(&mut self, raw: f32, alpha: f32, baseline_alpha: Option<f32>) -> f32 {
        self.ema += alpha * (raw - self.ema);
        match baseline_alpha {
            Some(beta) => {
                self.baseline += beta * (self.ema - self.baseline);
                self.ema - self.baseline
            }
            None => self.ema,
        }
    }

    /// Last fast-EMA value
    pub fn ema(&self) -> f32 {
        self.ema
    }

    /// Last baseline value
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Zero both accumulators
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
