//! backend/mod.rs
//! Raw streams the decorators sit on: memory regions and `std::io` objects.

pub mod memory;
pub mod stdio;

pub use memory::{ConstMemoryStream, MemCursor, MemoryStream};
pub use stdio::{IoStream, ReaderStream};
