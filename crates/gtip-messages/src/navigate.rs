#![forbid(unsafe_code)]

//! Wrap-around navigation over a location-sorted entry slice.
//!
//! Both directions wrap: stepping past the last entry lands on the first and
//! stepping before the first lands on the last. The only failure is an empty
//! slice. Moving the cursor and recentring the view on the result is the
//! caller's job.

use crate::message::Location;
use crate::store::MergedEntry;

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Smallest index whose location is strictly after `from`, or `0` if none.
///
/// `entries` must be sorted by location.
#[must_use]
pub fn next(entries: &[MergedEntry], from: Location) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }
    let i = entries.partition_point(|e| e.location <= from);
    Some(if i == entries.len() { 0 } else { i })
}

/// Largest index whose location is strictly before `from`, or the last index
/// if none.
///
/// `entries` must be sorted by location.
#[must_use]
pub fn prev(entries: &[MergedEntry], from: Location) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }
    let i = entries.partition_point(|e| e.location < from);
    Some(if i == 0 { entries.len() - 1 } else { i - 1 })
}

/// Step from `from` in `direction`.
#[must_use]
pub fn navigate(entries: &[MergedEntry], from: Location, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Next => next(entries, from),
        Direction::Prev => prev(entries, from),
    }
}
