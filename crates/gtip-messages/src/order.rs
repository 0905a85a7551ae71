#![forbid(unsafe_code)]

//! The total order used to sort messages before merging.

use std::cmp::Ordering;

use crate::message::SortedMessage;

/// Compare two messages for display order.
///
/// 1. Start location ascending (line, then column).
/// 2. Severity descending (`Error` before `Warn` before `Info`).
/// 3. Owner ascending (byte-wise string comparison).
///
/// Messages equal on all three keys compare `Equal`; sorting with a stable
/// sort then keeps the host's order for them.
#[must_use]
pub fn compare_messages(a: &SortedMessage, b: &SortedMessage) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.severity.cmp(&a.severity))
        .then_with(|| a.owner.cmp(&b.owner))
}
