use std::io::SeekFrom;

use crate::stream::{Caps, Inner, VStream};
use crate::types::{StreamError, StreamResult, Transfer};

/// Pass-through layer.
///
/// Used to hand a stream to code that will close it without giving up
/// ownership (wrap an [`Inner::Borrowed`]), or to hide the write side.
pub struct DummyWrapper<'a> {
    inner: Inner<'a>,
    read_only: bool,
}

impl<'a> DummyWrapper<'a> {
    pub fn new(inner: Inner<'a>) -> Self {
        DummyWrapper { inner, read_only: false }
    }

    /// Same as [`new`](Self::new) but every write fails with `ReadOnly`.
    pub fn read_only(inner: Inner<'a>) -> Self {
        DummyWrapper { inner, read_only: true }
    }

    pub fn is_autoclose(&self) -> bool {
        self.inner.autoclose()
    }
}

impl VStream for DummyWrapper<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        self.inner.get().read(dst)
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        if self.read_only {
            return Transfer::failed(0, StreamError::ReadOnly);
        }
        self.inner.get().write(src)
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        self.inner.get().seek(pos)
    }

    fn size(&mut self) -> StreamResult<u64> {
        self.inner.get().size()
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        self.inner.release()
    }

    fn caps(&self) -> Caps {
        let caps = self.inner.caps();
        if self.read_only {
            caps - Caps::WRITE
        } else {
            caps
        }
    }
}
