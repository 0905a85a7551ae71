#![forbid(unsafe_code)]

//! Greedy word wrap into a rectangular block.
//!
//! The wrapper walks [`Token`]s left to right keeping a running width in
//! cells:
//! - [`Token::Break`] ends the current line and is not emitted.
//! - A word whose visible part would push the line past `max_width - 1`
//!   starts a new line. The last column is reserved so wrapped text never
//!   touches the panel's right edge.
//! - A word that does not fit even on an empty line is emitted alone on an
//!   over-width line. Words are never split.
//! - Blank words left over from runs of spaces are dropped at the start of
//!   a soft-wrapped line.
//!
//! Lines are trimmed of trailing whitespace and then right-padded to the
//! widest line, because the panel renders fixed-width rows.
//!
//! # Example
//! ```
//! use gtip_text::{tokenize, wrap_tokens};
//!
//! let block = wrap_tokens(&tokenize("supercalifragilistic is long"), 10);
//! assert_eq!(block.lines[0], "supercalifragilistic");
//! assert_eq!(block.width, 20);
//! ```

use tracing::trace;

use crate::token::Token;
use crate::width::{display_width, pad_to_width};

/// Output of [`wrap_tokens`]: equal-width lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrappedBlock {
    /// Rows, each exactly `width` cells wide.
    pub lines: Vec<String>,
    /// Width of the widest line before padding.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
}

impl WrappedBlock {
    /// Check whether an unsplittable word forced the block past `max_width`.
    #[must_use]
    pub fn exceeds(&self, max_width: usize) -> bool {
        self.width > max_width
    }
}

/// Wrap tokens to `max_width` cells (one of which is reserved as margin).
///
/// Always produces at least one line.
#[must_use]
pub fn wrap_tokens(tokens: &[Token], max_width: usize) -> WrappedBlock {
    let budget = max_width.saturating_sub(1);
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    let mut soft_wrapped = false;

    for token in tokens {
        match token {
            Token::Break => {
                lines.push(finalize_line(&mut current_line));
                current_width = 0;
                soft_wrapped = false;
            }
            Token::Word(text) => {
                let visible = token.visible_width();
                if !current_line.is_empty() && current_width + visible > budget {
                    trace!(current_width, visible, budget, "soft wrap");
                    lines.push(finalize_line(&mut current_line));
                    current_width = 0;
                    soft_wrapped = true;
                }
                if soft_wrapped && current_line.is_empty() && text.trim().is_empty() {
                    continue;
                }
                current_line.push_str(text);
                current_width += token.width();
            }
        }
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(finalize_line(&mut current_line));
    }

    let width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let lines: Vec<String> = lines.iter().map(|l| pad_to_width(l, width)).collect();
    let height = lines.len();

    WrappedBlock {
        lines,
        width,
        height,
    }
}

/// Take the line out of the buffer with trailing whitespace removed.
fn finalize_line(line: &mut String) -> String {
    let finished = line.trim_end().to_string();
    line.clear();
    finished
}
