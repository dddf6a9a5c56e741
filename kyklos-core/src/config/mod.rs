//! Configuration type definitions

pub mod types;

pub use types::{ConfigError, DetectorConfig};
