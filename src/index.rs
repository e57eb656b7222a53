//! The two ways an [`Array`] interprets an `isize` index.
//!
//! Element access and insertion use [`index_at()`] and [`insert_at()`], which
//! accept only the raw value: a negative index is always out of bounds.
//! Slicing uses [`normalized_start()`] and [`normalized_range()`], which first
//! count negative values back from the end. The two are deliberately separate.
//!
//! [`Array`]: super::Array

use std::ops::{Range};
use std::panic::{Location};

use super::{IndexOutOfBounds, Operation, Result};

/// Returns `index` as a `usize` if it is in `0..size`.
#[inline]
pub(crate) fn index_at(
    index: isize,
    size: usize,
    operation: Operation,
    location: &'static Location<'static>,
) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i < size => Ok(i),
        _ => Err(IndexOutOfBounds::raise(index, size, operation, location)),
    }
}

/// Returns `index` as a `usize` if it is in `0..=size`, i.e. a valid
/// insertion point.
#[inline]
pub(crate) fn insert_at(
    index: isize,
    size: usize,
    operation: Operation,
    location: &'static Location<'static>,
) -> Result<usize> {
    match usize::try_from(index) {
        Ok(i) if i <= size => Ok(i),
        _ => Err(IndexOutOfBounds::raise(index, size, operation, location)),
    }
}

// ----------------------------------------------------------------------------

/// Maps a negative `start` to `size + start`, then checks it is in `0..=size`.
///
/// `start == size` is accepted and denotes an empty tail.
pub(crate) fn normalized_start(
    start: isize,
    size: usize,
    operation: Operation,
    location: &'static Location<'static>,
) -> Result<usize> {
    let start = if start < 0 { to_isize(size) + start } else { start };
    insert_at(start, size, operation, location)
}

/// Normalizes `start` as [`normalized_start()`] does, then maps a negative
/// `count` to `size - start + count`, and returns `start .. start + count`.
///
/// Fails if the normalized `count` is still negative or if the range ends
/// beyond `size`. The reported index is the offending end of the range.
pub(crate) fn normalized_range(
    start: isize,
    count: isize,
    size: usize,
    operation: Operation,
    location: &'static Location<'static>,
) -> Result<Range<usize>> {
    let start = normalized_start(start, size, operation, location)?;
    let remaining = to_isize(size - start);
    let count = if count < 0 { remaining + count } else { count };
    if count < 0 || count > remaining {
        let end = to_isize(start).saturating_add(count);
        return Err(IndexOutOfBounds::raise(end, size, operation, location));
    }
    Ok(start .. start + count as usize)
}

/// `Vec` lengths never exceed `isize::MAX`.
#[inline(always)]
fn to_isize(n: usize) -> isize { n as isize }

// ----------------------------------------------------------------------------
