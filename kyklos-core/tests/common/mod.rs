//! Shared helpers for host-side detector tests

#![allow(dead_code)]

use kyklos_core::config::DetectorConfig;
use kyklos_core::detector::{DetectorEvent, RepDetector};
use kyklos_core::sample::{AccelSample, Vec3, STANDARD_GRAVITY};

/// Sample period of the synthetic stream (50 Hz)
pub const STEP_MS: u64 = 20;

/// Shape of one synthetic push-up set
#[derive(Debug, Clone, Copy)]
pub struct WaveSpec {
    /// Number of down/up cycles
    pub reps: usize,
    /// Acceleration plateau while dropping (g, negative)
    pub dip_g: f32,
    /// Acceleration plateau while pushing back up (g, positive)
    pub peak_g: f32,
    /// Length of the descent plateau (ms)
    pub descent_ms: u64,
    /// Length of the rise plateau (ms)
    pub rise_ms: u64,
    /// Quiet time between cycles (ms)
    pub rest_ms: u64,
}

impl Default for WaveSpec {
    fn default() -> Self {
        Self {
            reps: 3,
            dip_g: -0.6,
            peak_g: 0.5,
            descent_ms: 260,
            rise_ms: 200,
            rest_ms: 1700,
        }
    }
}

fn plateau(samples: &mut Vec<AccelSample>, t: &mut u64, gravity: Vec3, level_g: f32, ms: u64) {
    for _ in 0..(ms / STEP_MS) {
        let accel = gravity.scale(1.0 + level_g);
        samples.push(AccelSample::new(accel.x, accel.y, accel.z, *t));
        *t += STEP_MS;
    }
}

/// Synthetic push-up set with gravity (and motion) along `direction`
///
/// Starts with a one-second quiet lead-in so the gravity filter settles
/// before the first cycle.
pub fn pushup_wave_along(spec: &WaveSpec, direction: Vec3) -> Vec<AccelSample> {
    let gravity = direction.scale(STANDARD_GRAVITY / direction.magnitude());
    let mut samples = Vec::new();
    let mut t = 0u64;

    plateau(&mut samples, &mut t, gravity, 0.0, 1_000);
    for _ in 0..spec.reps {
        plateau(&mut samples, &mut t, gravity, spec.dip_g, spec.descent_ms);
        plateau(&mut samples, &mut t, gravity, spec.peak_g, spec.rise_ms);
        plateau(&mut samples, &mut t, gravity, 0.0, spec.rest_ms);
    }
    samples
}

/// Synthetic push-up set with the device lying flat (gravity on +Z)
pub fn pushup_wave(spec: &WaveSpec) -> Vec<AccelSample> {
    pushup_wave_along(spec, Vec3::new(0.0, 0.0, 1.0))
}

/// Feed every sample and collect the emitted events
pub fn run_detector(detector: &mut RepDetector, samples: &[AccelSample]) -> Vec<DetectorEvent> {
    let mut events = Vec::new();
    for sample in samples {
        if let Some(output) = detector.process_sample(*sample) {
            if let Some(event) = output.event {
                events.push(event);
            }
        }
    }
    events
}

/// Configuration that makes the filters transparent: gravity frozen
/// after cold start, no smoothing lag, no baseline
pub fn passthrough_config() -> DetectorConfig {
    DetectorConfig {
        sensitivity: 1.0,
        gravity_alpha: 1.0,
        smoothing_alpha: 1.0,
        baseline_alpha: None,
        down_threshold_g: -0.20,
        up_threshold_g: 0.20,
        min_hold_ms: 100,
        debounce_ms: 600,
        ..DetectorConfig::default()
    }
}

/// Flat-on-the-floor sample carrying `vertical_g` of extra lift
pub fn flat_sample(vertical_g: f32, timestamp_ms: u64) -> AccelSample {
    AccelSample::new(
        0.0,
        0.0,
        STANDARD_GRAVITY * (1.0 + vertical_g),
        timestamp_ms,
    )
}
