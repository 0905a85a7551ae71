#![forbid(unsafe_code)]

//! Visual width of message text in terminal cells.
//!
//! Widths are measured per grapheme cluster so that combining marks, ZWJ
//! sequences and wide (CJK, emoji) characters count as they render, not as
//! their byte or `char` count.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[inline]
fn is_zero_width_codepoint(c: char) -> bool {
    let u = c as u32;
    matches!(u, 0x0000..=0x001F | 0x007F..=0x009F)
        || matches!(u, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF)
        || matches!(u, 0xFE00..=0xFE0F | 0xFE20..=0xFE2F)
        || matches!(u, 0x00AD | 0x200B | 0x200C | 0x200D | 0x2060 | 0xFEFF)
}

/// Width of a single grapheme cluster.
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().all(is_zero_width_codepoint) {
        return 0;
    }
    grapheme.width()
}

/// Calculate the display width of text in cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return text.len();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Truncate text to fit within a width, never splitting a grapheme.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let w = grapheme_width(grapheme);
        if current_width + w > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += w;
    }

    result
}

/// Right-pad `text` with spaces until it is `width` cells wide.
///
/// Text already at or beyond `width` is returned unchanged.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(current));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    padded
}
