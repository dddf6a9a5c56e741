//! Board-agnostic motion core for the Kyklos rep counter
//!
//! This crate contains all detection logic that does not depend on a
//! specific device, sensor stack, or UI:
//!
//! - Accelerometer sample model and vector math
//! - Gravity separation and signal smoothing filters
//! - Scalar-signal strategies (gravity projection, fixed axis)
//! - Threshold state machine with hold/debounce/timeout guards
//! - Detection pipeline and the events it emits
//! - Sensor boundary trait
//! - Bounded diagnostic trace

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod detector;
pub mod filter;
pub mod sample;
pub mod signal;
pub mod trace;
pub mod traits;
