//! Index and slice normalization
//!
//! Every index a caller hands to a [`Vector`](crate::Vector) may be negative,
//! meaning "counted from the end". These functions turn such indices into
//! slot numbers before anything touches the buffer, so `get`, `set`, `pop`,
//! `insert` and `slice` all agree on what an index means.

use core::iter::FusedIterator;

// `len` never exceeds `isize::MAX`, the heap refuses to grow past it
fn signed_len(len: usize) -> isize { len as isize }

fn from_end(index: isize, len: usize) -> isize {
    if index < 0 {
        // can't overflow: `index` is negative and `len` is non-negative
        index + signed_len(len)
    } else {
        index
    }
}

/// Resolves `index` against a sequence of length `len`
///
/// Returns `None` if the resolved index is not in `0..len`.
pub fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let index = from_end(index, len);
    if 0 <= index && index < signed_len(len) {
        Some(index as usize)
    } else {
        None
    }
}

/// Resolves an insertion point against a sequence of length `len`
///
/// Insertion never fails: positions past either end are clamped into `0..=len`.
pub fn normalize_insert_index(index: isize, len: usize) -> usize {
    from_end(index, len).max(0).min(signed_len(len)) as usize
}

/// The slots selected by a slice, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceIndices {
    start: isize,
    step: isize,
    len: usize,
}

impl SliceIndices {
    /// The number of selected slots
    pub fn len(&self) -> usize { self.len }

    /// Returns true if the slice selects nothing
    pub fn is_empty(&self) -> bool { self.len == 0 }
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None
        }

        let slot = self.start as usize;
        self.len -= 1;
        if self.len != 0 {
            self.start += self.step;
        }
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl ExactSizeIterator for SliceIndices {}
impl FusedIterator for SliceIndices {}

/// Resolves `start:stop:step` against a sequence of length `len`
///
/// Bounds follow python's slice rules: negative bounds count from the end,
/// out of range bounds are clamped, and a missing bound means "from the
/// beginning" or "to the end" in the direction of `step`. Reversed or
/// empty ranges select nothing.
///
/// Returns `None` only if `step` is zero.
pub fn normalize_slice(start: Option<isize>, stop: Option<isize>, step: isize, len: usize) -> Option<SliceIndices> {
    if step == 0 {
        return None
    }

    let (lower, upper) = if step > 0 {
        (0, signed_len(len))
    } else {
        (-1, signed_len(len) - 1)
    };

    let clamp = |bound: isize| {
        if bound < 0 {
            (bound + signed_len(len)).max(lower)
        } else {
            bound.min(upper)
        }
    };

    let start = start.map_or(if step < 0 { upper } else { lower }, clamp);
    let stop = stop.map_or(if step < 0 { lower } else { upper }, clamp);

    let span = if step > 0 { stop - start } else { start - stop };
    let len = if span > 0 {
        (span as usize - 1) / step.unsigned_abs() + 1
    } else {
        0
    };

    Some(SliceIndices { start, step, len })
}
