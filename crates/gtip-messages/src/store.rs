#![forbid(unsafe_code)]

//! The ordered, location-merged message index.
//!
//! # Invariants
//!
//! 1. Entries are sorted by [`Location`] ascending.
//! 2. No two entries share a location; messages with an identical start
//!    (line *and* column) are merged into one entry.
//! 3. The index is rebuilt wholesale by [`MessageIndex::load`] and never
//!    patched, so nothing outlives the message set it came from.
//!
//! # Composition
//!
//! Within one location, messages are grouped by `(severity, owner)` in the
//! order the groups first appear after sorting. Each group renders as a
//! `[SEVERITY] owner` header line followed by its body; a group with two or
//! more bodies renders each on its own line prefixed with [`BULLET`].

use gtip_text::{Token, append_tokens, join_tokens};
use tracing::debug;

use crate::message::{Location, RawMessage, Severity, SortedMessage};
use crate::navigate::{self, Direction};
use crate::order::compare_messages;

/// Marker prefixed to each body of a multi-message group.
pub const BULLET: &str = "• ";

/// One displayable entry: every message that starts at `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedEntry {
    pub location: Location,
    /// Composed text with hard breaks between header and body lines.
    pub tokens: Vec<Token>,
    /// Most severe message in the entry.
    pub severity: Severity,
    /// Number of raw messages merged into this entry.
    pub count: usize,
}

impl MergedEntry {
    /// The composed text with `\n` for each hard break.
    #[must_use]
    pub fn rendered_text(&self) -> String {
        join_tokens(&self.tokens)
    }
}

/// Compose the entry for a run of messages sharing `location`.
///
/// `messages` must already be in [`compare_messages`] order.
#[must_use]
pub fn compose_entry(location: Location, messages: &[SortedMessage]) -> MergedEntry {
    let mut groups: Vec<(Severity, &str, Vec<&[Token]>)> = Vec::new();
    for msg in messages {
        match groups
            .iter_mut()
            .find(|(severity, owner, _)| *severity == msg.severity && *owner == msg.owner)
        {
            Some((_, _, bodies)) => bodies.push(msg.body.as_slice()),
            None => groups.push((msg.severity, msg.owner.as_str(), vec![msg.body.as_slice()])),
        }
    }

    let mut tokens = Vec::new();
    for (i, (severity, owner, bodies)) in groups.iter().enumerate() {
        if i > 0 {
            tokens.push(Token::Break);
        }
        append_tokens(&mut tokens, &format!("[{severity}] {owner}"));
        tokens.push(Token::Break);

        if let [body] = bodies.as_slice() {
            tokens.extend_from_slice(body);
            continue;
        }
        for (j, body) in bodies.iter().enumerate() {
            if j > 0 {
                tokens.push(Token::Break);
            }
            tokens.push(Token::word(BULLET));
            tokens.extend_from_slice(body);
        }
    }

    MergedEntry {
        location,
        tokens,
        severity: messages
            .iter()
            .map(|m| m.severity)
            .max()
            .unwrap_or_default(),
        count: messages.len(),
    }
}

/// Navigable index of merged entries, sorted by location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageIndex {
    entries: Vec<MergedEntry>,
}

impl MessageIndex {
    /// Build the index from the host's full message set.
    ///
    /// An empty set yields an empty index; callers report that as
    /// "no messages", not as a failure.
    #[must_use]
    pub fn load(raw: impl IntoIterator<Item = RawMessage>) -> Self {
        let mut sorted: Vec<SortedMessage> = raw.into_iter().map(SortedMessage::from).collect();
        if sorted.is_empty() {
            debug!("message set is empty");
            return Self::default();
        }

        sorted.sort_by(compare_messages);
        let entries: Vec<MergedEntry> = sorted
            .chunk_by(|a, b| a.start == b.start)
            .map(|run| compose_entry(run[0].start, run))
            .collect();

        debug!(
            messages = sorted.len(),
            entries = entries.len(),
            "loaded message index"
        );
        Self { entries }
    }

    /// Index of the first entry on `line`.
    #[must_use]
    pub fn find_at_line(&self, line: u32) -> Option<usize> {
        self.entries.iter().position(|e| e.location.line == line)
    }

    /// Next entry after `from`, wrapping to the first.
    #[must_use]
    pub fn next_from(&self, from: Location) -> Option<usize> {
        navigate::next(&self.entries, from)
    }

    /// Previous entry before `from`, wrapping to the last.
    #[must_use]
    pub fn prev_from(&self, from: Location) -> Option<usize> {
        navigate::prev(&self.entries, from)
    }

    /// Step from `from` in `direction`.
    #[must_use]
    pub fn step(&self, from: Location, direction: Direction) -> Option<usize> {
        navigate::navigate(&self.entries, from, direction)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MergedEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[MergedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MergedEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a MessageIndex {
    type Item = &'a MergedEntry;
    type IntoIter = std::slice::Iter<'a, MergedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn severity() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::Info),
            Just(Severity::Warn),
            Just(Severity::Error)
        ]
    }

    fn message() -> impl Strategy<Value = RawMessage> {
        (0u32..6, 0u32..4, severity(), "[ab]", "[a-z ]{0,12}").prop_map(
            |(line, column, severity, owner, text)| {
                RawMessage::new(text, Location::new(line, column), severity, owner)
            },
        )
    }

    proptest! {
        #[test]
        fn index_is_sorted_and_location_unique(msgs in prop::collection::vec(message(), 0..40)) {
            let index = MessageIndex::load(msgs.clone());
            for pair in index.entries().windows(2) {
                prop_assert!(pair[0].location < pair[1].location);
            }
            let total: usize = index.iter().map(|e| e.count).sum();
            prop_assert_eq!(total, msgs.len());
        }

        #[test]
        fn load_ignores_input_order(mut msgs in prop::collection::vec(message(), 0..20)) {
            // Distinct bodies per key would make the order of full ties visible.
            msgs.sort_by(|a, b| a.text.cmp(&b.text));
            let forward = MessageIndex::load(msgs.clone());
            let locations: Vec<_> = forward.iter().map(|e| e.location).collect();
            msgs.reverse();
            let backward = MessageIndex::load(msgs);
            let back_locations: Vec<_> = backward.iter().map(|e| e.location).collect();
            prop_assert_eq!(locations, back_locations);
        }
    }
}
