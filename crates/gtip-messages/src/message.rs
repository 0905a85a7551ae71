#![forbid(unsafe_code)]

//! Diagnostic message types.

use std::fmt;
use std::str::FromStr;

use gtip_text::{Token, tokenize};

/// A buffer position (0-indexed).
///
/// Ordered by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Buffer line.
    pub line: u32,
    /// Column on that line.
    pub column: u32,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Diagnostic severity.
///
/// The derived order is `Info < Warn < Error`; among messages at the same
/// location the more severe one is shown first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Informational note.
    #[default]
    Info,
    /// Warning.
    Warn,
    /// Error.
    Error,
}

impl Severity {
    /// Upper-case label used in message headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a severity name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    input: String,
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity {:?}", self.input)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts full names in any case and the single-letter type codes linters
    /// commonly report (`E`, `W`, `I`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "error" => Ok(Self::Error),
            "w" | "warn" | "warning" => Ok(Self::Warn),
            "i" | "info" | "information" => Ok(Self::Info),
            _ => Err(ParseSeverityError {
                input: s.to_string(),
            }),
        }
    }
}

/// A diagnostic as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Message text; `\n` separates paragraphs.
    pub text: String,
    /// Start of the flagged range.
    pub start: Location,
    /// End of the flagged range.
    pub end: Location,
    /// Severity.
    pub severity: Severity,
    /// Producer name, e.g. a linter id.
    pub owner: String,
}

impl RawMessage {
    /// Create a message whose range is the single position `start`.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        start: Location,
        severity: Severity,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end: start,
            severity,
            owner: owner.into(),
        }
    }

    /// Set the end of the flagged range.
    #[must_use]
    pub fn with_end(mut self, end: Location) -> Self {
        self.end = end;
        self
    }
}

/// A message whose body has been tokenized, ready for ordering and merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedMessage {
    pub start: Location,
    pub end: Location,
    pub severity: Severity,
    pub owner: String,
    /// Body with paragraph breaks as [`Token::Break`].
    pub body: Vec<Token>,
}

impl From<RawMessage> for SortedMessage {
    fn from(raw: RawMessage) -> Self {
        Self {
            start: raw.start,
            end: raw.end,
            severity: raw.severity,
            body: tokenize(&raw.text),
            owner: raw.owner,
        }
    }
}
