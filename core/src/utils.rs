use std::io::SeekFrom;

use crate::types::{StreamError, StreamResult};

/// Double `current` until it covers `required`.
///
/// Fails instead of looping when doubling would overflow or pass `max`.
pub fn grow_capacity(current: usize, required: usize, max: usize) -> StreamResult<usize> {
    let overflow = || StreamError::CapacityOverflow { requested: required as u128 };

    if required > max {
        return Err(overflow());
    }

    let mut capacity = current.max(1);
    while capacity < required {
        capacity = capacity.checked_mul(2).ok_or_else(overflow)?;
    }

    // Doubling may overshoot the limit even though `required` fits.
    Ok(capacity.min(max))
}

/// `base + delta` as an absolute position, if it stays in `u64`.
#[inline]
pub fn offset_by(base: u64, delta: i64) -> Option<u64> {
    if delta >= 0 {
        base.checked_add(delta as u64)
    } else {
        base.checked_sub(delta.unsigned_abs())
    }
}

/// Resolve a seek request against a region of `len` bytes with cursor `current`.
///
/// Targets outside `[0, len]` are rejected.
pub fn resolve_seek(pos: SeekFrom, current: u64, len: u64) -> StreamResult<u64> {
    let (base, delta) = match pos {
        SeekFrom::Start(off) => {
            return if off <= len {
                Ok(off)
            } else {
                Err(StreamError::InvalidSeek { target: off as i128 })
            };
        }
        SeekFrom::Current(delta) => (current, delta),
        SeekFrom::End(delta) => (len, delta),
    };

    match offset_by(base, delta) {
        Some(target) if target <= len => Ok(target),
        _ => Err(StreamError::InvalidSeek { target: base as i128 + delta as i128 }),
    }
}
