use std::io::SeekFrom;

use crate::stream::{Caps, VStream};
use crate::types::{StreamError, StreamResult, Transfer};
use crate::utils::resolve_seek;

/// Read/write position over a memory region that may move.
///
/// The cursor does not hold the region; callers pass the current one on
/// every call, so a reallocated buffer keeps its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemCursor {
    pos: usize,
}

impl MemCursor {
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn read_from(&mut self, region: &[u8], dst: &mut [u8]) -> Transfer {
        let start = self.pos.min(region.len());
        let n = dst.len().min(region.len() - start);
        dst[..n].copy_from_slice(&region[start..start + n]);
        self.pos = start + n;
        Transfer::settled(n, dst.len())
    }

    pub fn write_into(&mut self, region: &mut [u8], src: &[u8]) -> Transfer {
        let start = self.pos.min(region.len());
        let n = src.len().min(region.len() - start);
        region[start..start + n].copy_from_slice(&src[..n]);
        self.pos = start + n;
        Transfer::settled(n, src.len())
    }

    pub fn seek(&mut self, len: usize, pos: SeekFrom) -> StreamResult<u64> {
        let target = resolve_seek(pos, self.pos as u64, len as u64)?;
        self.pos = target as usize;
        Ok(target)
    }
}

/// Fixed-size writable memory region.
#[derive(Debug)]
pub struct MemoryStream<'a> {
    region: &'a mut [u8],
    cursor: MemCursor,
}

impl<'a> MemoryStream<'a> {
    pub fn new(region: &'a mut [u8]) -> Self {
        MemoryStream { region, cursor: MemCursor::default() }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn get_ref(&self) -> &[u8] {
        &*self.region
    }
}

impl VStream for MemoryStream<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        self.cursor.read_from(&*self.region, dst)
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        self.cursor.write_into(&mut *self.region, src)
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        self.cursor.seek(self.region.len(), pos)
    }

    fn size(&mut self) -> StreamResult<u64> {
        Ok(self.region.len() as u64)
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        Ok(())
    }
}

/// Read-only memory region.
#[derive(Debug, Clone)]
pub struct ConstMemoryStream<'a> {
    region: &'a [u8],
    cursor: MemCursor,
}

impl<'a> ConstMemoryStream<'a> {
    pub fn new(region: &'a [u8]) -> Self {
        ConstMemoryStream { region, cursor: MemCursor::default() }
    }
}

impl VStream for ConstMemoryStream<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        self.cursor.read_from(self.region, dst)
    }

    fn write(&mut self, _src: &[u8]) -> Transfer {
        Transfer::failed(0, StreamError::ReadOnly)
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        self.cursor.seek(self.region.len(), pos)
    }

    fn size(&mut self) -> StreamResult<u64> {
        Ok(self.region.len() as u64)
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        Ok(())
    }

    fn caps(&self) -> Caps {
        Caps::READ | Caps::SEEK | Caps::SIZE
    }
}
