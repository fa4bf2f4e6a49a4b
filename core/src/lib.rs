//! vstream-core
//!
//! Composable virtual byte streams: one stream protocol, a few raw
//! backends, and decorators that window, buffer, hash or trace another stream.
//! No FFI, no unsafe.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

pub mod crypto;
pub mod pool;
pub mod telemetry;

// Stream layers
pub mod backend;
pub mod stream;
pub mod wrappers;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::backend::{ConstMemoryStream, IoStream, MemoryStream, ReaderStream};
    pub use crate::config::{AutoBufferConfig, HashPolicy, TraceConfig};
    pub use crate::crypto::{Accumulator, DigestAlg, DigestState};
    pub use crate::pool::{ObjectPool, PoolObject};
    pub use crate::stream::{Caps, Inner, StdAdapter, VStream};
    pub use crate::types::{IoStatus, StreamError, StreamResult, Transfer};
    pub use crate::wrappers::{AutoBuffer, DummyWrapper, HashingWrapper, SegmentWrapper, TraceWrapper};
}
