//! Events emitted by the detector
//!
//! At most one event is produced per processed sample, returned
//! synchronously so the embedding can drive a display or a haptic
//! without callback plumbing.

/// Count-affecting detector events
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectorEvent {
    /// A full down/up cycle was confirmed
    RepCounted {
        /// Total reps since the last reset
        count: u32,
        /// Deepest smoothed signal seen during the descent (g)
        trough_g: f32,
        /// Time from entering the descent to the counted rise (ms)
        duration_ms: u32,
    },
    /// The count was reset to zero
    CountReset,
}

impl DetectorEvent {
    /// The rep count after this event
    pub fn count(&self) -> u32 {
        match self {
            DetectorEvent::RepCounted { count, .. } => *count,
            DetectorEvent::CountReset => 0,
        }
    }

    /// Check if this event is a newly counted rep
    pub fn is_rep(&self) -> bool {
        matches!(self, DetectorEvent::RepCounted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_after_event() {
        let rep = DetectorEvent::RepCounted {
            count: 7,
            trough_g: -0.4,
            duration_ms: 430,
        };
        assert_eq!(rep.count(), 7);
        assert_eq!(DetectorEvent::CountReset.count(), 0);
    }

    #[test]
    fn test_is_rep() {
        let rep = DetectorEvent::RepCounted {
            count: 1,
            trough_g: -0.3,
            duration_ms: 200,
        };
        assert!(rep.is_rep());
        assert!(!DetectorEvent::CountReset.is_rep());
    }
}
