//! stream/std_io.rs
//! Bridge from [`VStream`] to `std::io` so any consumer of `Read`/`Write`/`Seek`
//! can sit on top of a decorator chain.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::stream::VStream;
use crate::types::{IoStatus, StreamError, StreamResult};

fn into_io(err: StreamError) -> io::Error {
    match err {
        StreamError::Io(e) => e,
        StreamError::RangeViolation { .. } | StreamError::InvalidSeek { .. } => {
            io::Error::new(io::ErrorKind::InvalidInput, err)
        }
        StreamError::NotSeekable | StreamError::Unsupported(_) | StreamError::ReadOnly => {
            io::Error::new(io::ErrorKind::Unsupported, err)
        }
        StreamError::CapacityOverflow { .. } => io::Error::new(io::ErrorKind::OutOfMemory, err),
        StreamError::InvalidRange { .. } => io::Error::new(io::ErrorKind::InvalidInput, err),
    }
}

#[derive(Debug)]
pub struct StdAdapter<S: VStream> {
    inner: S,
}

impl<S: VStream> StdAdapter<S> {
    pub fn new(inner: S) -> Self {
        StdAdapter { inner }
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Unwrap and close the underlying stream.
    pub fn close(self) -> StreamResult<()> {
        S::close(Box::new(self.inner))
    }
}

impl<S: VStream> Read for StdAdapter<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let t = self.inner.read(buf);
        match t.status {
            // Bytes already moved win; the error shows up on the next call.
            IoStatus::Error(e) if t.len == 0 => Err(into_io(e)),
            _ => Ok(t.len),
        }
    }
}

impl<S: VStream> Write for StdAdapter<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let t = self.inner.write(buf);
        match t.status {
            IoStatus::Error(e) if t.len == 0 => Err(into_io(e)),
            _ => Ok(t.len),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: VStream> Seek for StdAdapter<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos).map_err(into_io)
    }
}
