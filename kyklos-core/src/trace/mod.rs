//! Diagnostic signal trace
//!
//! A bounded ring of per-sample records for host-side inspection and
//! replay tooling. Owned by the embedding, never by the detector.

pub mod buffer;

pub use buffer::{SignalTrace, TraceRecord, TRACE_DEPTH};
