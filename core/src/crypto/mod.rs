//! crypto/mod.rs
//! Hash accumulators fed by the hashing wrapper.

pub mod digest;

pub use digest::{Accumulator, DigestAlg, DigestState};
