//! wrappers/autobuf.rs
//! Stream over a growable, privately owned memory buffer.
//!
//! The buffer doubles when a write would run past its capacity. Growth moves
//! the memory, so the address is not stable across writes: read it again
//! through [`AutoBuffer::data`] after writing, or register a hook with
//! [`AutoBuffer::on_grow`] to be told synchronously on every reallocation.

use std::io::SeekFrom;

use bytes::Bytes;

use crate::backend::MemCursor;
use crate::config::AutoBufferConfig;
use crate::constants::MIN_AUTOBUFFER_CAPACITY;
use crate::stream::VStream;
use crate::types::{StreamError, StreamResult, Transfer};
use crate::utils::grow_capacity;

/// Called with the live buffer right after it was (re)allocated.
pub type GrowHook = Box<dyn FnMut(&[u8])>;

pub struct AutoBuffer {
    /// Always `capacity` bytes long; unwritten bytes are zero.
    data: Vec<u8>,
    cursor: MemCursor,
    max_capacity: usize,
    growth_events: usize,
    hook: Option<GrowHook>,
}

impl AutoBuffer {
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_config(AutoBufferConfig {
            initial_capacity,
            ..AutoBufferConfig::default()
        })
    }

    pub fn with_config(config: AutoBufferConfig) -> Self {
        let capacity = match config.initial_capacity {
            0 => MIN_AUTOBUFFER_CAPACITY,
            n => n,
        };

        AutoBuffer {
            data: vec![0u8; capacity],
            cursor: MemCursor::default(),
            max_capacity: config.max_capacity.max(capacity),
            growth_events: 0,
            hook: None,
        }
    }

    /// Register the growth hook. It fires once immediately with the current buffer.
    pub fn on_grow<F>(&mut self, hook: F)
    where
        F: FnMut(&[u8]) + 'static,
    {
        let mut hook: GrowHook = Box::new(hook);
        hook(&self.data);
        self.hook = Some(hook);
    }

    /// Current view of the whole buffer (capacity bytes).
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// How many reallocations happened so far.
    pub fn growth_events(&self) -> usize {
        self.growth_events
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }

    fn grow(&mut self, required: usize) -> StreamResult<()> {
        let capacity = grow_capacity(self.data.len(), required, self.max_capacity)?;

        // The cursor survives the move; only the region changes.
        self.data.resize(capacity, 0);
        self.growth_events += 1;
        log::debug!("autobuffer: grew to {} bytes", capacity);

        if let Some(hook) = self.hook.as_mut() {
            hook(&self.data);
        }
        Ok(())
    }
}

impl VStream for AutoBuffer {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        self.cursor.read_from(&self.data, dst)
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        let pos = self.cursor.position();
        let required = match pos.checked_add(src.len()) {
            Some(required) => required,
            None => {
                let requested = pos as u128 + src.len() as u128;
                return Transfer::failed(0, StreamError::CapacityOverflow { requested });
            }
        };

        if required > self.data.len() {
            if let Err(e) = self.grow(required) {
                log::warn!("autobuffer: {}", e);
                return Transfer::failed(0, e);
            }
        }

        self.cursor.write_into(&mut self.data, src)
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        self.cursor.seek(self.data.len(), pos)
    }

    fn size(&mut self) -> StreamResult<u64> {
        Ok(self.data.len() as u64)
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        Ok(())
    }
}
