#![forbid(unsafe_code)]

//! Editor-side surface the controller drives.

use gtip_core::geometry::{Point, Size};
use gtip_messages::{Location, RawMessage};
use gtip_panel::ViewId;

/// Raw screen metrics reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMetrics {
    /// Terminal columns.
    pub columns: u16,
    /// Terminal rows, including the status line and any tab bar.
    pub rows: u16,
    /// Number of open tabs.
    pub tab_count: usize,
}

impl ViewportMetrics {
    #[must_use]
    pub const fn new(columns: u16, rows: u16, tab_count: usize) -> Self {
        Self {
            columns,
            rows,
            tab_count,
        }
    }

    /// Area available to panels: one row goes to the status line and one
    /// more to the tab bar when several tabs are open.
    #[must_use]
    pub fn working_area(&self) -> Size {
        let reserved = 1 + u16::from(self.tab_count > 1);
        Size::new(self.columns, self.rows.saturating_sub(reserved))
    }
}

/// Editor operations the controller needs besides panel display.
pub trait EditorHost {
    /// Current messages for the active document.
    fn messages(&self) -> Vec<RawMessage>;

    /// Cursor location in the active document.
    fn cursor(&self) -> Location;

    fn set_cursor(&mut self, at: Location);

    /// Scroll so `at` is vertically centered.
    fn center_on(&mut self, at: Location);

    fn viewport_metrics(&self) -> ViewportMetrics;

    /// Screen cell of a buffer location, relative to the working area and
    /// accounting for soft wrap and horizontal scroll.
    fn screen_point(&self, at: Location) -> Point;

    /// View that currently has focus.
    fn active_view(&self) -> ViewId;

    /// Show a one-line message on the status line.
    fn show_status(&mut self, message: &str);
}
