//! telemetry/mod.rs
//! Counters collected by diagnostic layers.

pub mod counters;

pub use counters::*;
