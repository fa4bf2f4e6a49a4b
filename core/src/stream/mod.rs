//! stream/mod.rs
//! The stream protocol every backend and decorator implements.
//!
//! A stream is a single-owner handle: no layer locks, and concurrent use of
//! one handle from several threads is the caller's problem. Composition is
//! plain nesting: a decorator owns or borrows an [`Inner`] and relays to it.

use std::io::SeekFrom;

use crate::types::{StreamResult, Transfer};

pub mod std_io;

pub use std_io::StdAdapter;

bitflags::bitflags! {
    /// Operations a stream layer actually supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Caps: u8 {
        const READ = 0b0000_0001;
        const WRITE = 0b0000_0010;
        const SEEK = 0b0000_0100;
        const SIZE = 0b0000_1000;
    }
}

/// Virtual byte stream: read, write, seek, size, close.
pub trait VStream {
    /// Read into `dst`. A short count comes with `Eof` or `Error` status.
    fn read(&mut self, dst: &mut [u8]) -> Transfer;

    /// Write `src`. Same partial-result contract as [`read`](VStream::read).
    fn write(&mut self, src: &[u8]) -> Transfer;

    /// Reposition; returns the new absolute position.
    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64>;

    /// Total length in bytes.
    fn size(&mut self) -> StreamResult<u64>;

    /// Release this layer (and the inner stream, if owned). Terminal.
    fn close(self: Box<Self>) -> StreamResult<()>;

    #[inline]
    fn tell(&mut self) -> StreamResult<u64> {
        self.seek(SeekFrom::Current(0))
    }

    fn caps(&self) -> Caps {
        Caps::all()
    }
}

impl<S: VStream + ?Sized> VStream for Box<S> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        (**self).read(dst)
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        (**self).write(src)
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        (**self).seek(pos)
    }

    fn size(&mut self) -> StreamResult<u64> {
        (**self).size()
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        S::close(*self)
    }

    fn tell(&mut self) -> StreamResult<u64> {
        (**self).tell()
    }

    fn caps(&self) -> Caps {
        (**self).caps()
    }
}

/// Handle a decorator holds on the stream it wraps.
///
/// `Owned` is the autoclose case: closing the decorator closes the inner
/// stream too. `Borrowed` shares the stream without transferring ownership,
/// so it stays open and usable once the decorator is gone. Only one layer
/// can own a given stream, which rules out double closes.
pub enum Inner<'a> {
    Owned(Box<dyn VStream + 'a>),
    Borrowed(&'a mut dyn VStream),
}

impl<'a> Inner<'a> {
    pub fn owned<S: VStream + 'a>(stream: S) -> Self {
        Inner::Owned(Box::new(stream))
    }

    pub fn borrowed<S: VStream + 'a>(stream: &'a mut S) -> Self {
        Inner::Borrowed(stream)
    }

    /// Whether closing the holder also closes this stream.
    #[inline]
    pub fn autoclose(&self) -> bool {
        matches!(self, Inner::Owned(_))
    }

    #[inline]
    pub fn get(&mut self) -> &mut dyn VStream {
        match self {
            Inner::Owned(s) => s.as_mut(),
            Inner::Borrowed(s) => &mut **s,
        }
    }

    #[inline]
    pub fn caps(&self) -> Caps {
        match self {
            Inner::Owned(s) => s.caps(),
            Inner::Borrowed(s) => s.caps(),
        }
    }

    /// Close if owned; a borrowed stream is left untouched.
    pub fn release(self) -> StreamResult<()> {
        match self {
            Inner::Owned(s) => s.close(),
            Inner::Borrowed(_) => Ok(()),
        }
    }
}

impl<'a> From<Box<dyn VStream + 'a>> for Inner<'a> {
    fn from(stream: Box<dyn VStream + 'a>) -> Self {
        Inner::Owned(stream)
    }
}

impl<'a> From<&'a mut dyn VStream> for Inner<'a> {
    fn from(stream: &'a mut dyn VStream) -> Self {
        Inner::Borrowed(stream)
    }
}
