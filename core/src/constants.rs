/// Capacity used when an auto buffer is created with zero bytes.
pub const MIN_AUTOBUFFER_CAPACITY: usize = 16;

/// Defaults when no config is supplied
pub const DEFAULT_AUTOBUFFER_CAPACITY: usize = 4 * 1024; // 4 KiB

/// Upper bound for auto buffer growth (doubling stops here).
pub const MAX_AUTOBUFFER_CAPACITY: usize = isize::MAX as usize;

/// `log` target used by the trace wrapper.
pub const TRACE_TARGET: &str = "vstream::trace";

/// Scratch size used when a segment emulates a forward seek by reading.
pub const SKIP_CHUNK_SIZE: usize = 4 * 1024;

/// Tag reported by pools that carry no telemetry.
pub const POOL_STATS_TAG: &str = "<none>";
