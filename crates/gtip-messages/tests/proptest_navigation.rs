//! Property-based tests for message navigation.
//!
//! 1. `next`/`prev` agree with a linear scan over the sorted entries.
//! 2. `next` from the last entry returns 0; `prev` from the first returns
//!    the last index.
//! 3. Walking `next` visits every entry exactly once per cycle.

use gtip_messages::{Direction, Location, MessageIndex, RawMessage, Severity, navigate};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn location() -> impl Strategy<Value = Location> {
    (0u32..50, 0u32..10).prop_map(|(line, column)| Location::new(line, column))
}

fn index_strategy() -> impl Strategy<Value = MessageIndex> {
    prop::collection::vec(location(), 1..30).prop_map(|locations| {
        MessageIndex::load(
            locations
                .into_iter()
                .map(|loc| RawMessage::new("msg", loc, Severity::Info, "lint")),
        )
    })
}

fn linear_next(index: &MessageIndex, from: Location) -> usize {
    index
        .iter()
        .position(|e| e.location > from)
        .unwrap_or(0)
}

fn linear_prev(index: &MessageIndex, from: Location) -> usize {
    index
        .iter()
        .rposition(|e| e.location < from)
        .unwrap_or(index.len() - 1)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Agreement with a linear scan
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn next_matches_linear_scan(index in index_strategy(), from in location()) {
        prop_assert_eq!(index.next_from(from), Some(linear_next(&index, from)));
    }

    #[test]
    fn prev_matches_linear_scan(index in index_strategy(), from in location()) {
        prop_assert_eq!(index.prev_from(from), Some(linear_prev(&index, from)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Wrap-around at the ends
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn next_from_last_wraps_to_first(index in index_strategy()) {
        let last = index.get(index.len() - 1).unwrap().location;
        prop_assert_eq!(index.next_from(last), Some(0));
    }

    #[test]
    fn prev_from_first_wraps_to_last(index in index_strategy()) {
        let first = index.get(0).unwrap().location;
        prop_assert_eq!(index.prev_from(first), Some(index.len() - 1));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Full cycle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn next_cycle_visits_each_entry_once(index in index_strategy()) {
        let mut seen = vec![false; index.len()];
        let mut at = index.get(index.len() - 1).unwrap().location;
        for _ in 0..index.len() {
            let i = navigate(index.entries(), at, Direction::Next).unwrap();
            prop_assert!(!seen[i], "entry {} visited twice", i);
            seen[i] = true;
            at = index.get(i).unwrap().location;
        }
        prop_assert!(seen.iter().all(|&s| s));
    }
}
