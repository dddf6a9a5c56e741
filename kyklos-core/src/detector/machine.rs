//! Threshold state machine for rep counting
//!
//! Consumes the smoothed scalar signal one sample at a time and decides
//! when a full down/up cycle happened. All timing guards compare
//! caller-supplied monotonic timestamps; the machine never reads a
//! clock.

use libm::fabsf;

use crate::config::DetectorConfig;

use super::events::DetectorEvent;

/// Detection phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for the signal to drop through the descent threshold
    #[default]
    Idle,
    /// Descent seen; waiting for the matching rise
    DownPhase,
}

impl Phase {
    /// Check if a descent is in progress
    pub fn is_down(&self) -> bool {
        matches!(self, Phase::DownPhase)
    }
}

/// Hysteresis state machine with hold, debounce, and timeout guards
///
/// Threshold comparisons are strict: a value exactly on a threshold
/// never fires. A completed rise is evaluated before the timeout rules,
/// so a rep finishing right at a timing boundary is counted rather than
/// discarded.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepMachine {
    phase: Phase,
    count: u32,
    /// When the current descent began
    entered_down_at_ms: Option<u64>,
    /// When the last rep was counted
    last_rep_at_ms: Option<u64>,
    /// Deepest signal seen during the current descent
    trough_g: Option<f32>,
}

impl RepMachine {
    /// Create a machine in `Idle` with the count at zero
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            count: 0,
            entered_down_at_ms: None,
            last_rep_at_ms: None,
            trough_g: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Reps counted since the last reset
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Deepest signal of the descent in progress, if one is in progress
    pub fn trough_g(&self) -> Option<f32> {
        self.trough_g
    }

    /// Advance the machine by one smoothed sample
    pub fn step(
        &mut self,
        signal_g: f32,
        now_ms: u64,
        config: &DetectorConfig,
    ) -> Option<DetectorEvent> {
        match self.phase {
            Phase::Idle => {
                if signal_g < config.down_threshold() {
                    self.phase = Phase::DownPhase;
                    self.entered_down_at_ms = Some(now_ms);
                    self.trough_g = Some(signal_g);
                }
                None
            }
            Phase::DownPhase => self.step_down_phase(signal_g, now_ms, config),
        }
    }

    fn step_down_phase(
        &mut self,
        signal_g: f32,
        now_ms: u64,
        config: &DetectorConfig,
    ) -> Option<DetectorEvent> {
        let entered = self.entered_down_at_ms.unwrap_or(now_ms);
        let held_ms = now_ms.saturating_sub(entered);

        let trough = match self.trough_g {
            Some(t) if t <= signal_g => t,
            _ => signal_g,
        };
        self.trough_g = Some(trough);

        let held_long_enough = held_ms >= u64::from(config.min_hold_ms);
        let debounced = match self.last_rep_at_ms {
            Some(last) => now_ms.saturating_sub(last) >= u64::from(config.debounce_ms),
            None => true,
        };

        if signal_g > config.up_threshold() && held_long_enough && debounced {
            self.count += 1;
            self.last_rep_at_ms = Some(now_ms);
            self.to_idle();
            return Some(DetectorEvent::RepCounted {
                count: self.count,
                trough_g: trough,
                duration_ms: held_ms.min(u64::from(u32::MAX)) as u32,
            });
        }

        let settled = fabsf(signal_g) < config.neutral_band_g
            && held_ms > u64::from(config.neutral_timeout_ms);
        let overran = held_ms > u64::from(config.max_down_ms);
        if settled || overran {
            self.to_idle();
        }
        None
    }

    /// Zero the count and return to `Idle`, clearing every timestamp
    ///
    /// Returns the count-changed notification for the caller's display.
    /// Idempotent.
    pub fn reset(&mut self) -> DetectorEvent {
        *self = Self::new();
        DetectorEvent::CountReset
    }

    fn to_idle(&mut self) {
        self.phase = Phase::Idle;
        self.entered_down_at_ms = None;
        self.trough_g = None;
    }
}
