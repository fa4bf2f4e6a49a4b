//! types.rs
//! Shared result/status types for every stream layer.

use std::io;

/// Unified stream error covering backend I/O, range checks and unsupported operations.
/// - `From<io::Error>` enables `?` inside backends.
/// - Messages are stable; the trace wrapper logs them verbatim.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Backend I/O failure, relayed unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Access outside a segment window.
    #[error("segment range violation: position {position} outside [{start}, {end}]")]
    RangeViolation { position: u64, start: u64, end: u64 },

    /// Segment bounds rejected at construction (`end` must exceed `start`).
    #[error("invalid segment range: start={start}, end={end}")]
    InvalidRange { start: u64, end: u64 },

    /// Seek target not representable (negative or past a fixed region).
    #[error("invalid seek to {target}")]
    InvalidSeek { target: i128 },

    /// Stream does not support repositioning.
    #[error("stream is not seekable")]
    NotSeekable,

    /// Stream refuses writes.
    #[error("stream is read-only")]
    ReadOnly,

    /// Operation missing from this stream layer.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Growable buffer cannot represent the requested size.
    #[error("buffer capacity overflow: {requested} bytes requested")]
    CapacityOverflow { requested: u128 },
}

pub type StreamResult<T> = Result<T, StreamError>;

/// Outcome class of a read or write.
#[derive(Debug)]
pub enum IoStatus {
    /// Everything requested was transferred.
    Ready,
    /// End of data (or of the window) was reached; `len` may be short.
    Eof,
    /// The call failed; `len` counts what was transferred before the failure.
    Error(StreamError),
}

/// Result of a read or write: bytes moved plus how the call ended.
///
/// Short transfers are never retried by any layer; callers decide.
#[derive(Debug)]
pub struct Transfer {
    pub len: usize,
    pub status: IoStatus,
}

impl Transfer {
    #[inline]
    pub fn ready(len: usize) -> Self {
        Self { len, status: IoStatus::Ready }
    }

    #[inline]
    pub fn eof(len: usize) -> Self {
        Self { len, status: IoStatus::Eof }
    }

    #[inline]
    pub fn failed(len: usize, err: StreamError) -> Self {
        Self { len, status: IoStatus::Error(err) }
    }

    /// Classify a transfer of `len` out of `requested` bytes that hit no error.
    #[inline]
    pub fn settled(len: usize, requested: usize) -> Self {
        if len < requested {
            Self::eof(len)
        } else {
            Self::ready(len)
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.status, IoStatus::Eof)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, IoStatus::Error(_))
    }

    pub fn error(&self) -> Option<&StreamError> {
        match &self.status {
            IoStatus::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Split into the byte count and the error, if any.
    pub fn into_result(self) -> StreamResult<usize> {
        match self.status {
            IoStatus::Error(e) => Err(e),
            _ => Ok(self.len),
        }
    }
}
