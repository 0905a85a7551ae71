#![forbid(unsafe_code)]

//! Panel placement within the editing viewport.
//!
//! # Invariants
//!
//! 1. Placement is pure: no display I/O, same inputs give the same rect.
//! 2. When the anchor is too close to the right edge, the panel flips left
//!    so its last column is the anchor column.
//! 3. After clamping, the panel height never exceeds the larger of the space
//!    above and below the anchor.
//! 4. The returned rect never extends past the viewport.
//!
//! # Decision rule
//!
//! Width: `space_right = viewport.width - anchor.x`, `min = viewport.width /
//! 3`, `max = viewport.width - 4`.
//! 1. `space_right < min` → wrap at `min`, right edge at the anchor
//! 2. `space_right > max` → wrap at `max`
//! 3. otherwise → wrap at `space_right`
//!
//! Height: `above = anchor.y`, `below = viewport.height - anchor.y`. A panel
//! below starts one row under the anchor, so it has `below - 1` rows.
//! 1. Fits in `below - 1` rows → one row under the anchor
//! 2. Fits above → ending on the row over the anchor
//! 3. `above > 1.5 × below` → above, clamped to `above` rows
//! 4. otherwise → below, clamped to `below - 1` rows
//!
//! Only tiers 3 and 4 shorten the panel.

use gtip_core::geometry::{Point, Rect, Size};
use gtip_text::{Token, WrappedBlock, wrap_tokens};
use tracing::debug;

#[inline]
fn cells(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}

/// Placement tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    /// Columns added to the wrapped block's width (default: 1).
    pub right_margin: u16,
    /// Columns kept free at the viewport's right edge when capping the wrap
    /// width (default: 4).
    pub edge_reserve: u16,
    /// The minimum wrap width is `viewport.width / min_width_divisor`
    /// (default: 3).
    pub min_width_divisor: u16,
    /// When the panel fits neither side, it goes above only if the space
    /// above exceeds `flip_ratio` times the space below (default: 1.5).
    pub flip_ratio: f32,
    /// Reserve one row above the text for the panel title (default: true).
    pub title_row: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            right_margin: 1,
            edge_reserve: 4,
            min_width_divisor: 3,
            flip_ratio: 1.5,
            title_row: true,
        }
    }
}

impl PlacementConfig {
    /// Set the right margin in columns.
    #[must_use]
    pub fn right_margin(mut self, columns: u16) -> Self {
        self.right_margin = columns;
        self
    }

    /// Set the right-edge reserve in columns.
    #[must_use]
    pub fn edge_reserve(mut self, columns: u16) -> Self {
        self.edge_reserve = columns;
        self
    }

    /// Set the minimum-width divisor.
    #[must_use]
    pub fn min_width_divisor(mut self, divisor: u16) -> Self {
        self.min_width_divisor = divisor;
        self
    }

    /// Set the above/below preference ratio for clamped panels.
    #[must_use]
    pub fn flip_ratio(mut self, ratio: f32) -> Self {
        self.flip_ratio = ratio;
        self
    }

    /// Enable or disable the title row.
    #[must_use]
    pub fn title_row(mut self, enabled: bool) -> Self {
        self.title_row = enabled;
        self
    }
}

/// Which panel edge is pinned to the anchor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Panel starts at the anchor and extends right.
    LeftEdgeAtAnchor,
    /// Panel ends at the anchor and extends left.
    RightEdgeAtAnchor,
}

/// Width budget handed to the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthChoice {
    pub budget: u16,
    pub align: HorizontalAlign,
}

/// Side of the anchor the panel ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Below,
    Above,
}

/// Final panel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rect: Rect,
    pub side: VerticalSide,
    /// The panel fit on neither side and its height was cut down.
    pub clamped: bool,
}

/// Wrapped text together with where to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub block: WrappedBlock,
    pub choice: WidthChoice,
    pub placement: Placement,
}

/// Computes panel geometry from viewport, anchor and content size.
#[derive(Debug, Clone, Default)]
pub struct PanelPlacer {
    config: PlacementConfig,
}

impl PanelPlacer {
    #[must_use]
    pub fn new(config: PlacementConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Smallest wrap width, never below one column.
    #[must_use]
    pub fn min_width(&self, viewport: Size) -> u16 {
        (viewport.width / self.config.min_width_divisor.max(1)).max(1)
    }

    /// Largest wrap width, never below one column.
    #[must_use]
    pub fn max_width(&self, viewport: Size) -> u16 {
        viewport
            .width
            .saturating_sub(self.config.edge_reserve)
            .max(1)
    }

    /// Choose the wrap width and horizontal alignment for an anchor.
    #[must_use]
    pub fn wrap_width(&self, viewport: Size, anchor: Point) -> WidthChoice {
        let space_right = viewport.width.saturating_sub(anchor.x);
        let min_width = self.min_width(viewport);
        let max_width = self.max_width(viewport);

        if space_right < min_width {
            WidthChoice {
                budget: min_width,
                align: HorizontalAlign::RightEdgeAtAnchor,
            }
        } else if space_right > max_width {
            WidthChoice {
                budget: max_width,
                align: HorizontalAlign::LeftEdgeAtAnchor,
            }
        } else {
            WidthChoice {
                budget: space_right,
                align: HorizontalAlign::LeftEdgeAtAnchor,
            }
        }
    }

    /// Position a wrapped block of `block` cells relative to `anchor`.
    #[must_use]
    pub fn place(
        &self,
        viewport: Size,
        anchor: Point,
        choice: WidthChoice,
        block: Size,
    ) -> Placement {
        let width = block.width.saturating_add(self.config.right_margin);
        let height = block
            .height
            .saturating_add(u16::from(self.config.title_row));

        let x = match choice.align {
            HorizontalAlign::LeftEdgeAtAnchor => anchor.x,
            HorizontalAlign::RightEdgeAtAnchor => anchor.x.saturating_sub(width.saturating_sub(1)),
        };

        let space_above = anchor.y;
        let space_below = viewport.height.saturating_sub(anchor.y);
        // The anchor row itself is not available to a panel placed below.
        let rows_below = space_below.saturating_sub(1);
        let below_y = anchor.y.saturating_add(1);

        let (y, height, side, clamped) = if height <= rows_below {
            (below_y, height, VerticalSide::Below, false)
        } else if height <= space_above {
            (anchor.y - height, height, VerticalSide::Above, false)
        } else if f32::from(space_above) > self.config.flip_ratio * f32::from(space_below) {
            (0, space_above, VerticalSide::Above, true)
        } else {
            (below_y, rows_below, VerticalSide::Below, true)
        };

        let rect = Rect::new(x, y, width, height).crop_to(viewport);
        debug!(
            ?anchor,
            ?side,
            clamped,
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "placed panel"
        );
        Placement {
            rect,
            side,
            clamped,
        }
    }

    /// Choose a width, wrap `tokens` to it and place the result.
    #[must_use]
    pub fn layout(&self, viewport: Size, anchor: Point, tokens: &[Token]) -> PanelLayout {
        let choice = self.wrap_width(viewport, anchor);
        let block = wrap_tokens(tokens, usize::from(choice.budget));
        let placement = self.place(
            viewport,
            anchor,
            choice,
            Size::new(cells(block.width), cells(block.height)),
        );
        PanelLayout {
            block,
            choice,
            placement,
        }
    }
}
