//! wrappers/mod.rs
//! Stream decorators. Each wraps an [`Inner`](crate::stream::Inner) (owned when
//! it should close it, borrowed otherwise) and relays to it.

pub mod autobuf;
pub mod dummy;
pub mod hashing;
pub mod segment;
pub mod trace;

pub use autobuf::{AutoBuffer, GrowHook};
pub use dummy::DummyWrapper;
pub use hashing::HashingWrapper;
pub use segment::SegmentWrapper;
pub use trace::TraceWrapper;
