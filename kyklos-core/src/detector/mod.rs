//! Rep detection
//!
//! The threshold state machine, the events it emits, and the pipeline
//! that feeds it one sample at a time.

pub mod events;
pub mod machine;
pub mod pipeline;

pub use events::DetectorEvent;
pub use machine::{Phase, RepMachine};
pub use pipeline::{RepDetector, StepOutput};
