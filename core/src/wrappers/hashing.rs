use std::io::SeekFrom;

use crate::config::HashPolicy;
use crate::crypto::Accumulator;
use crate::stream::{Caps, Inner, VStream};
use crate::types::{StreamError, StreamResult, Transfer};

/// Feeds every byte crossing `read`/`write` into a borrowed accumulator,
/// in stream order, while passing data through untouched.
///
/// Skipping bytes would desync the hash, so the only seek allowed is a tell.
/// The accumulator outlives the wrapper; closing never finalizes it.
pub struct HashingWrapper<'a> {
    inner: Inner<'a>,
    acc: &'a mut dyn Accumulator,
    policy: HashPolicy,
}

impl<'a> HashingWrapper<'a> {
    pub fn new(inner: Inner<'a>, acc: &'a mut dyn Accumulator) -> Self {
        Self::with_policy(inner, acc, HashPolicy::default())
    }

    pub fn with_policy(inner: Inner<'a>, acc: &'a mut dyn Accumulator, policy: HashPolicy) -> Self {
        HashingWrapper { inner, acc, policy }
    }

    pub fn policy(&self) -> HashPolicy {
        self.policy
    }

    pub fn is_autoclose(&self) -> bool {
        self.inner.autoclose()
    }
}

impl VStream for HashingWrapper<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        let t = self.inner.get().read(dst);
        // only what actually arrived
        self.acc.update(&dst[..t.len]);
        t
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        match self.policy {
            HashPolicy::Attempted => {
                self.acc.update(src);
                self.inner.get().write(src)
            }
            HashPolicy::Confirmed => {
                let t = self.inner.get().write(src);
                self.acc.update(&src[..t.len]);
                t
            }
        }
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        match pos {
            SeekFrom::Current(0) => self.inner.get().seek(pos),
            _ => Err(StreamError::NotSeekable),
        }
    }

    fn size(&mut self) -> StreamResult<u64> {
        self.inner.get().size()
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        self.inner.release()
    }

    fn caps(&self) -> Caps {
        self.inner.caps() - Caps::SEEK
    }
}
