//! config.rs
//! Option structs for the configurable wrappers.
//!
//! All of them deserialize with `#[serde(default)]`, so a partial document
//! (or none at all) yields the defaults from `constants.rs`.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTOBUFFER_CAPACITY, MAX_AUTOBUFFER_CAPACITY};

/// Growth settings for [`AutoBuffer`](crate::wrappers::AutoBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoBufferConfig {
    pub initial_capacity: usize,
    /// Writes that would need more than this fail with `CapacityOverflow`.
    pub max_capacity: usize,
}

impl Default for AutoBufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_AUTOBUFFER_CAPACITY,
            max_capacity: MAX_AUTOBUFFER_CAPACITY,
        }
    }
}

/// Log level of trace records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<TraceLevel> for log::Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Error => log::Level::Error,
            TraceLevel::Warn => log::Level::Warn,
            TraceLevel::Info => log::Level::Info,
            TraceLevel::Debug => log::Level::Debug,
            TraceLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    pub level: TraceLevel,
    /// Log the inner position after every read.
    pub report_position: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            level: TraceLevel::Debug,
            report_position: true,
        }
    }
}

/// Which bytes a hashing wrapper feeds on write.
///
/// Reads always hash only what was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashPolicy {
    /// Hash the whole payload before delegating. Matches historic digests;
    /// a short write leaves unwritten bytes in the hash.
    #[default]
    Attempted,
    /// Hash only the bytes the inner stream accepted.
    Confirmed,
}
