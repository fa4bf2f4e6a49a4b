//! wrappers/segment.rs
//! Window `[start, end)` of an inner stream, presented as `[0, end - start)`.
//!
//! Positions handed to the inner stream always stay inside `[start, end]`:
//! seeks are clamped, reads and writes are shrunk to the room left.
//!
//! Inner streams that cannot report a position (pipes, stdin) are handled
//! with a self-tracked position. That only works if the inner stream sits at
//! `start` when the segment is created and nothing else advances it while
//! the segment is in use.

use std::io::SeekFrom;

use crate::constants::SKIP_CHUNK_SIZE;
use crate::stream::{Caps, Inner, VStream};
use crate::types::{IoStatus, StreamError, StreamResult, Transfer};

pub struct SegmentWrapper<'a> {
    inner: Inner<'a>,
    start: u64,
    end: u64,
    /// Absolute position as last known; used when the inner stream cannot tell.
    fallback: u64,
}

impl<'a> SegmentWrapper<'a> {
    pub fn new(inner: Inner<'a>, start: u64, end: u64) -> StreamResult<Self> {
        if end <= start {
            return Err(StreamError::InvalidRange { start, end });
        }

        Ok(SegmentWrapper {
            inner,
            start,
            end,
            fallback: start,
        })
    }

    /// `(start, end)` in inner-stream coordinates.
    pub fn bounds(&self) -> (u64, u64) {
        (self.start, self.end)
    }

    /// Self-tracked absolute position.
    pub fn fallback_position(&self) -> u64 {
        self.fallback
    }

    pub fn is_autoclose(&self) -> bool {
        self.inner.autoclose()
    }

    #[inline]
    fn contains(&self, pos: u64) -> bool {
        pos >= self.start && pos <= self.end
    }

    /// Absolute result from the inner stream -> segment coordinates.
    fn relative(&mut self, absolute: u64) -> u64 {
        if self.contains(absolute) {
            self.fallback = absolute;
        }
        absolute.saturating_sub(self.start)
    }

    /// Inner position, or the tracked one if the inner stream cannot say.
    fn position(&mut self) -> u64 {
        match self.inner.get().tell() {
            Ok(pos) => pos,
            Err(e) => {
                log::debug!("segment: inner tell failed ({}), assuming position {}", e, self.fallback);
                self.fallback
            }
        }
    }

    /// Forward relative seek on an inner stream without positioning:
    /// read and drop bytes, never past `end`.
    fn skip_forward(&mut self, offset: i64) -> StreamResult<u64> {
        if offset < 0 {
            return Err(StreamError::NotSeekable);
        }

        let mut remaining = (offset as u64).min(self.end - self.fallback);
        let mut scratch = [0u8; SKIP_CHUNK_SIZE];

        while remaining > 0 {
            let want = remaining.min(SKIP_CHUNK_SIZE as u64) as usize;
            let t = self.inner.get().read(&mut scratch[..want]);
            self.fallback += t.len as u64;
            remaining -= t.len as u64;

            match t.status {
                IoStatus::Error(e) => return Err(e),
                IoStatus::Eof => break,
                IoStatus::Ready if t.len == 0 => break,
                IoStatus::Ready => {}
            }
        }

        Ok(self.fallback - self.start)
    }

    fn transfer<F>(&mut self, requested: usize, op: F) -> Transfer
    where
        F: FnOnce(&mut dyn VStream, usize) -> Transfer,
    {
        let pos = self.position();

        if !self.contains(pos) {
            log::warn!("segment range violation: position {} outside [{}, {}]", pos, self.start, self.end);
            return Transfer::failed(
                0,
                StreamError::RangeViolation { position: pos, start: self.start, end: self.end },
            );
        }

        self.fallback = pos;

        let room = self.end - pos;
        let allowed = (requested as u64).min(room) as usize;

        if allowed == 0 && requested > 0 {
            return Transfer::eof(0);
        }

        let t = op(self.inner.get(), allowed);
        self.fallback += t.len as u64;
        debug_assert!(self.fallback <= self.end, "segment position ran past its end");

        match t.status {
            IoStatus::Ready if allowed < requested => Transfer::eof(t.len),
            _ => t,
        }
    }
}

impl VStream for SegmentWrapper<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        self.transfer(dst.len(), |inner, n| inner.read(&mut dst[..n]))
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        self.transfer(src.len(), |inner, n| inner.write(&src[..n]))
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        let (start, end) = (self.start as i128, self.end as i128);

        let request = match pos {
            SeekFrom::Current(0) => match self.inner.get().tell() {
                Ok(here) => return Ok(self.relative(here)),
                Err(_) => return Ok(self.fallback - self.start),
            },

            SeekFrom::Current(offset) => {
                let here = match self.inner.get().tell() {
                    Ok(here) => here as i128,
                    Err(e) => {
                        log::debug!("segment: inner tell failed ({}), emulating seek", e);
                        return self.skip_forward(offset);
                    }
                };

                let target = (here + offset as i128).clamp(start, end);
                let offset = i64::try_from(target - here)
                    .map_err(|_| StreamError::InvalidSeek { target })?;
                SeekFrom::Current(offset)
            }

            SeekFrom::Start(offset) => SeekFrom::Start(self.start.saturating_add(offset).min(self.end)),

            SeekFrom::End(offset) => {
                // Relative to the window end when the inner stream extends past it.
                let size = self.inner.get().size()? as i128;
                let target = (size.min(end) + offset as i128).clamp(start, end);
                let offset = i64::try_from(target - size)
                    .map_err(|_| StreamError::InvalidSeek { target })?;
                SeekFrom::End(offset)
            }
        };

        let absolute = self.inner.get().seek(request)?;
        Ok(self.relative(absolute))
    }

    fn size(&mut self) -> StreamResult<u64> {
        let size = self.inner.get().size()?;
        Ok(size.min(self.end).saturating_sub(self.start))
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        self.inner.release()
    }

    fn caps(&self) -> Caps {
        self.inner.caps()
    }
}
