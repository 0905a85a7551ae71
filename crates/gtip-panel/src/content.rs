#![forbid(unsafe_code)]

//! What a panel shows and how the host should present it.

use gtip_messages::Severity;
use gtip_text::{WrappedBlock, display_width, pad_to_width, truncate_to_width};

/// Rows displayed in a panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelContent {
    /// Title row, already fitted to the text width. `None` when disabled.
    pub title: Option<String>,
    /// Wrapped text rows, all of equal width.
    pub lines: Vec<String>,
    /// Most severe message shown, for host styling.
    pub severity: Severity,
}

impl PanelContent {
    /// Content without a title row.
    #[must_use]
    pub fn new(block: WrappedBlock, severity: Severity) -> Self {
        Self {
            title: None,
            lines: block.lines,
            severity,
        }
    }

    /// Add a title, truncated and padded to the width of the text rows.
    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        let width = self.width();
        self.title = Some(pad_to_width(&truncate_to_width(title, width), width));
        self
    }

    /// Width of the text rows in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |l| display_width(l))
    }

    /// Every row in display order, title first.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.title
            .as_deref()
            .into_iter()
            .chain(self.lines.iter().map(String::as_str))
    }

    /// Number of rows including the title.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len() + usize::from(self.title.is_some())
    }
}

/// Presentation hints passed to the host when a panel is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    /// Whether the panel may take input focus (default: false).
    pub focusable: bool,
    /// Whether the host should color the panel by severity (default: true).
    pub style_by_severity: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            focusable: false,
            style_by_severity: true,
        }
    }
}

impl PanelOptions {
    #[must_use]
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    #[must_use]
    pub fn style_by_severity(mut self, enabled: bool) -> Self {
        self.style_by_severity = enabled;
        self
    }
}
