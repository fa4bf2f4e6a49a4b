//! backend/stdio.rs
//! `std::io` objects as streams: seekable (`File`, `Cursor`) and read-only
//! non-seekable (`Stdin`, pipes, sockets).

use std::io::{Read, Seek, SeekFrom, Write};

use crate::stream::{Caps, VStream};
use crate::types::{StreamError, StreamResult, Transfer};

/// A single `Read::read` call. Zero bytes for a non-empty buffer is end of data.
fn read_once<R: Read>(r: &mut R, dst: &mut [u8]) -> Transfer {
    match r.read(dst) {
        Ok(0) if !dst.is_empty() => Transfer::eof(0),
        Ok(n) => Transfer::ready(n),
        Err(e) => Transfer::failed(0, e.into()),
    }
}

/// Seekable std stream. Owns `T`; closing flushes and drops it.
#[derive(Debug)]
pub struct IoStream<T> {
    inner: T,
}

impl<T: Read + Write + Seek> IoStream<T> {
    pub fn new(inner: T) -> Self {
        IoStream { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write + Seek> VStream for IoStream<T> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        read_once(&mut self.inner, dst)
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        match self.inner.write(src) {
            Ok(0) if !src.is_empty() => Transfer::eof(0),
            Ok(n) => Transfer::ready(n),
            Err(e) => Transfer::failed(0, e.into()),
        }
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        Ok(self.inner.seek(pos)?)
    }

    fn size(&mut self) -> StreamResult<u64> {
        let here = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        if here != end {
            self.inner.seek(SeekFrom::Start(here))?;
        }
        Ok(end)
    }

    fn close(mut self: Box<Self>) -> StreamResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Read-only stream without positioning, e.g. standard input.
#[derive(Debug)]
pub struct ReaderStream<R> {
    inner: R,
}

impl<R: Read> ReaderStream<R> {
    pub fn new(inner: R) -> Self {
        ReaderStream { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> VStream for ReaderStream<R> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        read_once(&mut self.inner, dst)
    }

    fn write(&mut self, _src: &[u8]) -> Transfer {
        Transfer::failed(0, StreamError::ReadOnly)
    }

    fn seek(&mut self, _pos: SeekFrom) -> StreamResult<u64> {
        Err(StreamError::NotSeekable)
    }

    fn size(&mut self) -> StreamResult<u64> {
        Err(StreamError::Unsupported("size"))
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        Ok(())
    }

    fn caps(&self) -> Caps {
        Caps::READ
    }
}
