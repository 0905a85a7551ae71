#![forbid(unsafe_code)]

//! Structured wrap tokens.
//!
//! Message text travels through composition and wrapping as a sequence of
//! [`Token`]s. A soft wrap point is the trailing space carried by a
//! [`Token::Word`]; a hard line break is its own variant, so no reserved
//! marker string ever has to be recognised inside word text.

use crate::width::display_width;

/// A unit of wrappable text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A word including any trailing space it was split with.
    Word(String),
    /// Forced line break.
    Break,
}

impl Token {
    /// Create a word token.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word(text.into())
    }

    /// Check if this is a hard break.
    #[inline]
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }

    /// Full width including trailing whitespace. Zero for breaks.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Word(text) => display_width(text),
            Self::Break => 0,
        }
    }

    /// Width of the visible part (trailing whitespace excluded).
    #[must_use]
    pub fn visible_width(&self) -> usize {
        match self {
            Self::Word(text) => display_width(text.trim_end()),
            Self::Break => 0,
        }
    }
}

/// Split text into tokens.
///
/// Each `\n` (optionally preceded by `\r`) becomes a [`Token::Break`]. Every
/// paragraph is split at each space with the space kept on the preceding
/// word, so concatenating the words of a paragraph restores it exactly.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    append_tokens(&mut tokens, text);
    tokens
}

/// Append the tokens of `text` to an existing sequence.
pub fn append_tokens(tokens: &mut Vec<Token>, text: &str) {
    for (i, paragraph) in text.split('\n').enumerate() {
        if i > 0 {
            tokens.push(Token::Break);
        }
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        tokens.extend(
            paragraph
                .split_inclusive(' ')
                .map(|word| Token::Word(word.to_string())),
        );
    }
}

/// Render tokens back to plain text, with `\n` for each break.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Word(text) => out.push_str(text),
            Token::Break => out.push('\n'),
        }
    }
    out
}
