//! telemetry/counters.rs
//! Mutable counters kept by a trace wrapper.
//!
//! Summary: call counts and byte counts per operation, plus failed calls.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceCounters {
    pub reads: u64,
    pub writes: u64,
    pub seeks: u64,
    pub size_queries: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub errors: u64,
}

impl TraceCounters {
    /// Record one read that returned `len` bytes.
    pub fn add_read(&mut self, len: usize) {
        self.reads += 1;
        self.bytes_read += len as u64;
    }

    /// Record one write that accepted `len` bytes.
    pub fn add_write(&mut self, len: usize) {
        self.writes += 1;
        self.bytes_written += len as u64;
    }

    pub fn total_calls(&self) -> u64 {
        self.reads + self.writes + self.seeks + self.size_queries
    }
}

impl AddAssign for TraceCounters {
    fn add_assign(&mut self, other: Self) {
        self.reads += other.reads;
        self.writes += other.writes;
        self.seeks += other.seeks;
        self.size_queries += other.size_queries;
        self.bytes_read += other.bytes_read;
        self.bytes_written += other.bytes_written;
        self.errors += other.errors;
    }
}
