#![forbid(unsafe_code)]

//! Lifecycle of the single tooltip panel.
//!
//! The session owns at most one open panel and talks to the display through
//! [`PanelHost`]. It never decides *where* a panel goes; callers pass a rect
//! computed by [`PanelPlacer`](crate::PanelPlacer).
//!
//! # Invariants
//!
//! 1. At most one panel is open at a time.
//! 2. `close` takes the panel handle out before the host destroys it, so a
//!    re-entrant or repeated close is a no-op.
//! 3. Closing a focused panel returns focus to the view it was opened from.

use std::fmt;

use gtip_core::geometry::Rect;
use tracing::debug;

use crate::content::{PanelContent, PanelOptions};

/// Opaque identifier of a host view (an editor window or a panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Display operations the session needs from the host.
pub trait PanelHost {
    /// Create a floating panel covering `rect` and return its id.
    fn create_panel(&mut self, content: &PanelContent, rect: Rect, options: &PanelOptions)
    -> ViewId;

    /// Remove a panel created by [`create_panel`](Self::create_panel).
    fn destroy_panel(&mut self, panel: ViewId);

    /// Replace the rows shown by a panel.
    fn update_panel_content(&mut self, panel: ViewId, content: &PanelContent);

    /// Move or resize a panel.
    fn update_panel_geometry(&mut self, panel: ViewId, rect: Rect);

    /// Give input focus to a view.
    fn focus_view(&mut self, view: ViewId);
}

/// Session state violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A panel is already open.
    AlreadyOpen { panel: ViewId },
    /// The operation needs an open panel.
    NotOpen,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOpen { panel } => write!(f, "tooltip panel {panel} is already open"),
            Self::NotOpen => write!(f, "no tooltip panel is open"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone)]
struct OpenPanel {
    id: ViewId,
    origin: ViewId,
    rect: Rect,
    content: PanelContent,
}

/// Owner of the open tooltip panel, if any.
#[derive(Debug, Clone, Default)]
pub struct TooltipSession {
    options: PanelOptions,
    open: Option<OpenPanel>,
    last_closed: Option<ViewId>,
}

impl TooltipSession {
    /// Create a closed session that opens panels with `options`.
    #[must_use]
    pub fn new(options: PanelOptions) -> Self {
        Self {
            options,
            open: None,
            last_closed: None,
        }
    }

    /// Options forwarded to the host on panel creation.
    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// Open a panel over `rect`, remembering `origin` as the view to refocus.
    pub fn open<H: PanelHost + ?Sized>(
        &mut self,
        host: &mut H,
        content: PanelContent,
        rect: Rect,
        origin: ViewId,
    ) -> Result<ViewId, SessionError> {
        if let Some(open) = &self.open {
            return Err(SessionError::AlreadyOpen { panel: open.id });
        }
        let id = host.create_panel(&content, rect, &self.options);
        debug!(%id, %origin, ?rect, "tooltip opened");
        self.open = Some(OpenPanel {
            id,
            origin,
            rect,
            content,
        });
        Ok(id)
    }

    /// Swap the rows of the open panel.
    pub fn replace_content<H: PanelHost + ?Sized>(
        &mut self,
        host: &mut H,
        content: PanelContent,
    ) -> Result<(), SessionError> {
        let open = self.open.as_mut().ok_or(SessionError::NotOpen)?;
        host.update_panel_content(open.id, &content);
        open.content = content;
        Ok(())
    }

    /// Move the open panel's top-left corner.
    pub fn reposition<H: PanelHost + ?Sized>(
        &mut self,
        host: &mut H,
        x: u16,
        y: u16,
    ) -> Result<(), SessionError> {
        let open = self.open.as_mut().ok_or(SessionError::NotOpen)?;
        open.rect.x = x;
        open.rect.y = y;
        host.update_panel_geometry(open.id, open.rect);
        Ok(())
    }

    /// Change the open panel's size, keeping its corner.
    pub fn resize<H: PanelHost + ?Sized>(
        &mut self,
        host: &mut H,
        width: u16,
        height: u16,
    ) -> Result<(), SessionError> {
        let open = self.open.as_mut().ok_or(SessionError::NotOpen)?;
        open.rect.width = width;
        open.rect.height = height;
        host.update_panel_geometry(open.id, open.rect);
        Ok(())
    }

    /// Close the open panel.
    ///
    /// With `refocus` set, focus goes back to the origin view. Callers pass
    /// it only when the panel itself holds focus, so a close triggered by
    /// the user moving elsewhere leaves focus where they put it.
    ///
    /// Returns the closed panel's id, or `None` when nothing was open.
    pub fn close<H: PanelHost + ?Sized>(&mut self, host: &mut H, refocus: bool) -> Option<ViewId> {
        let open = self.open.take()?;
        self.last_closed = Some(open.id);
        host.destroy_panel(open.id);
        if refocus {
            host.focus_view(open.origin);
        }
        debug!(id = %open.id, origin = %open.origin, refocus, "tooltip closed");
        Some(open.id)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Whether `view` is the view the open panel was opened from.
    #[must_use]
    pub fn is_origin(&self, view: ViewId) -> bool {
        self.open.as_ref().is_some_and(|o| o.origin == view)
    }

    /// Whether `view` is the open panel itself.
    #[must_use]
    pub fn is_self(&self, view: ViewId) -> bool {
        self.open.as_ref().is_some_and(|o| o.id == view)
    }

    /// Whether `view` is the most recently closed panel.
    #[must_use]
    pub fn was_closed(&self, view: ViewId) -> bool {
        self.last_closed == Some(view)
    }

    /// View the open panel was opened from.
    #[must_use]
    pub fn origin(&self) -> Option<ViewId> {
        self.open.as_ref().map(|o| o.origin)
    }

    /// Id of the open panel.
    #[must_use]
    pub fn panel(&self) -> Option<ViewId> {
        self.open.as_ref().map(|o| o.id)
    }

    /// Current rect of the open panel.
    #[must_use]
    pub fn geometry(&self) -> Option<Rect> {
        self.open.as_ref().map(|o| o.rect)
    }

    /// Rows of the open panel.
    #[must_use]
    pub fn content(&self) -> Option<&PanelContent> {
        self.open.as_ref().map(|o| &o.content)
    }
}
