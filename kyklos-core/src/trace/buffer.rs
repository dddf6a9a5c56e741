//! Bounded trace ring

use heapless::HistoryBuffer;

use crate::detector::{Phase, StepOutput};

/// Records kept before the oldest is evicted
pub const TRACE_DEPTH: usize = 256;

/// One per-sample diagnostic record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TraceRecord {
    /// Sample timestamp (ms)
    pub timestamp_ms: u64,
    /// Smoothed motion signal (g)
    pub vertical_g: f32,
    /// Linear-acceleration magnitude (g)
    pub linear_g: f32,
    /// Phase after the sample
    pub phase: Phase,
}

impl From<&StepOutput> for TraceRecord {
    fn from(output: &StepOutput) -> Self {
        Self {
            timestamp_ms: output.timestamp_ms,
            vertical_g: output.vertical_g,
            linear_g: output.linear_g,
            phase: output.phase,
        }
    }
}

/// Fixed-depth ring of the most recent records
#[derive(Default)]
pub struct SignalTrace {
    ring: HistoryBuffer<TraceRecord, TRACE_DEPTH>,
}

impl SignalTrace {
    /// Create an empty trace
    pub fn new() -> Self {
        Self {
            ring: HistoryBuffer::new(),
        }
    }

    /// Append one record, evicting the oldest when full
    pub fn push(&mut self, record: TraceRecord) {
        self.ring.write(record);
    }

    /// Stored records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.ring.oldest_ordered()
    }

    /// Most recently pushed record
    pub fn last(&self) -> Option<&TraceRecord> {
        self.ring.recent()
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Check if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }
}
