//! Detection pipeline
//!
//! Wires the gravity filter, the signal strategy, the smoother, and the
//! threshold machine into the single per-sample update a device loop
//! calls. Push-driven and single-threaded: feed samples in arrival
//! order from one context.

use crate::config::DetectorConfig;
use crate::filter::{GravityFilter, SignalSmoother};
use crate::sample::{AccelSample, Vec3, STANDARD_GRAVITY};
use crate::signal::VerticalSignal;

use super::events::DetectorEvent;
use super::machine::{Phase, RepMachine};

/// Per-sample telemetry and outcome
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutput {
    /// Timestamp of the processed sample (ms)
    pub timestamp_ms: u64,
    /// Smoothed scalar motion signal (g); the live display value
    pub vertical_g: f32,
    /// Magnitude of the linear acceleration (g)
    pub linear_g: f32,
    /// Phase after this sample
    pub phase: Phase,
    /// At most one count-affecting event
    pub event: Option<DetectorEvent>,
}

/// Streaming rep detector
///
/// All state advances through [`process_sample`](Self::process_sample);
/// the caller owns the sensor subscription and the clock.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepDetector {
    config: DetectorConfig,
    gravity: GravityFilter,
    smoother: SignalSmoother,
    machine: RepMachine,
}

impl Default for RepDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl RepDetector {
    /// Create a detector with the given configuration and the count at zero
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            gravity: GravityFilter::new(),
            smoother: SignalSmoother::new(),
            machine: RepMachine::new(),
        }
    }

    /// Reps counted since the last reset
    pub fn count(&self) -> u32 {
        self.machine.count()
    }

    /// Current detection phase
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Current gravity estimate, if the filter has warmed up
    pub fn gravity(&self) -> Option<Vec3> {
        self.gravity.estimate()
    }

    /// Deepest signal of the descent in progress, if one is in progress
    pub fn trough_g(&self) -> Option<f32> {
        self.machine.trough_g()
    }

    /// Active configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Replace the configuration for subsequent samples
    ///
    /// Never re-evaluates the phase in progress; the new values are
    /// first consulted by the next `process_sample` call.
    pub fn update_config(&mut self, config: DetectorConfig) {
        self.config = config;
    }

    /// Process one sample and return telemetry plus at most one event
    ///
    /// Returns `None` for a sample with a non-finite component; such
    /// samples are dropped with every piece of state untouched.
    pub fn process_sample(&mut self, sample: AccelSample) -> Option<StepOutput> {
        if !sample.is_finite() {
            return None;
        }

        let gravity = self.gravity.update(sample.accel, self.config.gravity_alpha);
        let linear = sample.accel.sub(&gravity);
        let raw_g = self.config.signal.vertical_g(gravity, sample.accel);
        let vertical_g =
            self.smoother
                .update(raw_g, self.config.smoothing_alpha, self.config.baseline_alpha);
        let event = self
            .machine
            .step(vertical_g, sample.timestamp_ms, &self.config);

        Some(StepOutput {
            timestamp_ms: sample.timestamp_ms,
            vertical_g,
            linear_g: linear.magnitude() / STANDARD_GRAVITY,
            phase: self.machine.phase(),
            event,
        })
    }

    /// Zero the count and return to `Idle`
    ///
    /// Keeps the configuration, and keeps the gravity estimate unless
    /// `reset_clears_gravity` is set; everything else returns to the
    /// freshly constructed state. Idempotent, and valid mid-descent.
    pub fn reset(&mut self) -> DetectorEvent {
        self.smoother.reset();
        if self.config.reset_clears_gravity {
            self.gravity.reset();
        }
        self.machine.reset()
    }
}
