//! pool/mod.rs
//! Fixed-size record allocator.
//!
//! Pass-through implementation: no arena, no recycling. Every `acquire` is a
//! fresh zeroed allocation and every `release` frees it. Allocation failure
//! aborts, like any other allocation in the crate.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::constants::POOL_STATS_TAG;

static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("object belongs to pool #{owner}, released into pool #{pool}")]
    ForeignObject { owner: u64, pool: u64 },
}

/// Diagnostic snapshot. This pool keeps no telemetry, so it is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    pub tag: String,
    pub capacity: usize,
    pub usage: usize,
    pub peak_usage: usize,
}

/// One zero-initialized record handed out by [`ObjectPool::acquire`].
#[derive(Debug)]
pub struct PoolObject {
    pool_id: u64,
    bytes: Box<[u8]>,
}

impl Deref for PoolObject {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for PoolObject {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

#[derive(Debug)]
pub struct ObjectPool {
    id: u64,
    element_size: usize,
}

impl ObjectPool {
    pub fn new(element_size: usize) -> Self {
        ObjectPool {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            element_size,
        }
    }

    /// Sized-arena signature; `max_objects` and `tag` are not used by this pool.
    pub fn with_tag(element_size: usize, _max_objects: usize, _tag: &str) -> Self {
        Self::new(element_size)
    }

    pub fn object_size(&self) -> usize {
        self.element_size
    }

    pub fn acquire(&self) -> PoolObject {
        PoolObject {
            pool_id: self.id,
            bytes: vec![0u8; self.element_size].into_boxed_slice(),
        }
    }

    /// Give an object back. Objects from another pool are handed back in the error.
    pub fn release(&self, object: PoolObject) -> Result<(), (PoolError, PoolObject)> {
        if object.pool_id != self.id {
            let err = PoolError::ForeignObject { owner: object.pool_id, pool: self.id };
            return Err((err, object));
        }
        debug_assert_eq!(object.bytes.len(), self.element_size);
        drop(object);
        Ok(())
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            tag: POOL_STATS_TAG.to_string(),
            capacity: 0,
            usage: 0,
            peak_usage: 0,
        }
    }

    pub fn destroy(self) {}
}
