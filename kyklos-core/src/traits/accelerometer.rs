//! Accelerometer source trait

use crate::sample::AccelSample;

/// Errors that can occur when sourcing samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No accelerometer is available on this device
    NotPresent,
    /// The sensor exists but a read failed
    ReadFailed,
}

/// Trait for accelerometer sample sources
///
/// Implementations wrap the actual delivery mechanism (a driver's
/// data-ready poll, an OS sensor queue, a recorded trace) and hand the
/// core timestamped samples one at a time. Acquiring and releasing the
/// underlying subscription is the implementation's concern, scoped to
/// the active tracking lifetime.
pub trait Accelerometer {
    /// Poll for the next sample
    ///
    /// Returns `Ok(Some(sample))` when a new sample is ready and
    /// `Ok(None)` when there is nothing to deliver yet. A source that
    /// cannot deliver at all reports `SensorError::NotPresent` so the
    /// caller can surface the missing capability before tracking starts.
    ///
    /// Takes `&mut self` because polling typically consumes from a
    /// queue or a bus.
    fn poll_sample(&mut self) -> Result<Option<AccelSample>, SensorError>;

    /// Check whether the source can deliver samples at all
    fn is_available(&mut self) -> bool {
        !matches!(self.poll_sample(), Err(SensorError::NotPresent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedSource {
        samples: [Option<AccelSample>; 3],
        next: usize,
    }

    impl Accelerometer for ScriptedSource {
        fn poll_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
            let slot = self.samples.get(self.next).copied().flatten();
            self.next += 1;
            Ok(slot)
        }
    }

    struct MissingSource;

    impl Accelerometer for MissingSource {
        fn poll_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
            Err(SensorError::NotPresent)
        }
    }

    #[test]
    fn test_scripted_source_drains_in_order() {
        let mut source = ScriptedSource {
            samples: [
                Some(AccelSample::new(0.0, 0.0, 9.81, 0)),
                None,
                Some(AccelSample::new(0.0, 0.0, 9.81, 40)),
            ],
            next: 0,
        };

        assert_eq!(
            source.poll_sample().unwrap().map(|s| s.timestamp_ms),
            Some(0)
        );
        assert_eq!(source.poll_sample().unwrap(), None);
        assert_eq!(
            source.poll_sample().unwrap().map(|s| s.timestamp_ms),
            Some(40)
        );
    }

    #[test]
    fn test_missing_capability_is_detectable() {
        let mut source = MissingSource;
        assert!(!source.is_available());
        assert_eq!(source.poll_sample(), Err(SensorError::NotPresent));
    }
}
