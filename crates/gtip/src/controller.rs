#![forbid(unsafe_code)]

//! The tooltip controller.
//!
//! One [`Controller`] per host, handed every [`HostEvent`] through
//! [`Controller::handle`]. It owns the ordered message index, the selected
//! entry and the tooltip session.
//!
//! # Invariants
//!
//! 1. At most one panel is open before and after every event.
//! 2. The index is rebuilt from the host's messages after every reset and
//!    never patched in place.
//! 3. A user error leaves selection and panel state untouched.
//!
//! # Example
//!
//! ```ignore
//! let mut controller = Controller::new(TooltipConfig::default());
//! controller.handle(&mut host, HostEvent::command(&["dnext"]))?;
//! ```

use gtip_messages::{Direction, Location, MessageIndex, Severity};
use gtip_panel::{PanelContent, PanelHost, PanelPlacer, SessionError, TooltipSession, ViewId};
use tracing::{debug, debug_span, error};

use crate::command::{self, Action, CommandError};
use crate::config::TooltipConfig;
use crate::error::{InvariantViolation, UserError};
use crate::event::HostEvent;
use crate::host::EditorHost;

/// Why an event handler stopped early.
#[derive(Debug)]
enum Abort {
    User(UserError),
    Invariant(InvariantViolation),
}

impl From<UserError> for Abort {
    fn from(err: UserError) -> Self {
        Self::User(err)
    }
}

impl From<CommandError> for Abort {
    fn from(err: CommandError) -> Self {
        Self::User(err.into())
    }
}

impl From<InvariantViolation> for Abort {
    fn from(err: InvariantViolation) -> Self {
        Self::Invariant(err)
    }
}

impl From<SessionError> for Abort {
    fn from(err: SessionError) -> Self {
        Self::Invariant(err.into())
    }
}

/// Load the index on first use after a reset. An empty message set is never
/// cached so the next command asks the host again.
fn load_index<'a, H: EditorHost + ?Sized>(
    slot: &'a mut Option<MessageIndex>,
    host: &H,
) -> Result<&'a MessageIndex, UserError> {
    if slot.as_ref().is_none_or(MessageIndex::is_empty) {
        let index = MessageIndex::load(host.messages());
        if index.is_empty() {
            *slot = None;
            return Err(UserError::NoMessages);
        }
        *slot = Some(index);
    }
    slot.as_ref().ok_or(UserError::NoMessages)
}

fn title(severity: Severity, position: usize, total: usize, show_position: bool) -> String {
    if show_position {
        format!("{} {}/{}", severity.label(), position + 1, total)
    } else {
        severity.label().to_string()
    }
}

/// Tooltip state machine driven by host events.
#[derive(Debug, Clone)]
pub struct Controller {
    config: TooltipConfig,
    placer: PanelPlacer,
    session: TooltipSession,
    index: Option<MessageIndex>,
    current_index: Option<usize>,
    /// Set after centering the viewport so the resulting scroll notification
    /// does not close the panel that follows it.
    pending_recenter: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl Controller {
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            placer: PanelPlacer::new(config.placement.clone()),
            session: TooltipSession::new(config.panel.clone()),
            config,
            index: None,
            current_index: None,
            pending_recenter: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Entry selected by the last navigation or display.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The loaded index, if any command has loaded it since the last reset.
    #[must_use]
    pub fn index(&self) -> Option<&MessageIndex> {
        self.index.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> &TooltipSession {
        &self.session
    }

    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.session.is_open()
    }

    /// Process one host event.
    ///
    /// User errors are shown on the host's status line and are not returned.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] when host and controller disagree
    /// about panel state. The event is abandoned at that point.
    pub fn handle<H: EditorHost + PanelHost>(
        &mut self,
        host: &mut H,
        event: HostEvent,
    ) -> Result<(), InvariantViolation> {
        debug!(event = event.kind(), "host event");
        let recentering = std::mem::take(&mut self.pending_recenter);

        let outcome = match event {
            HostEvent::Command { args } => self.run_command(host, &args),
            HostEvent::Saved | HostEvent::DocumentSwitched | HostEvent::MessagesChanged => {
                self.reset(host);
                Ok(())
            }
            HostEvent::Split
            | HostEvent::TabSwitched
            | HostEvent::ModeChanged
            | HostEvent::Escape => {
                self.close_panel(host);
                Ok(())
            }
            HostEvent::Scrolled => {
                if recentering {
                    debug!("scroll caused by recenter, panel kept");
                } else {
                    self.close_panel(host);
                }
                Ok(())
            }
            HostEvent::MousePress { view, at } => {
                let on_panel = self.session.is_self(view)
                    || self.session.geometry().is_some_and(|rect| rect.contains(at));
                if !on_panel {
                    self.close_panel(host);
                }
                Ok(())
            }
            HostEvent::PanelQuitRequested { view } => self.panel_quit(host, view),
        };

        match outcome {
            Ok(()) => Ok(()),
            Err(Abort::User(err)) => {
                debug!(%err, "user error");
                host.show_status(&err.to_string());
                Ok(())
            }
            Err(Abort::Invariant(err)) => {
                error!(%err, "invariant violated");
                Err(err)
            }
        }
    }

    fn run_command<H: EditorHost + PanelHost>(
        &mut self,
        host: &mut H,
        args: &[String],
    ) -> Result<(), Abort> {
        let action: Action = command::parse(args)?;
        debug!(%action, "command");
        if let Some(direction) = action.direction() {
            self.step(host, direction)?;
        }
        if action.displays() {
            self.display(host)?;
        }
        Ok(())
    }

    /// Move the selection and the cursor to the neighbouring entry.
    fn step<H: EditorHost + PanelHost>(
        &mut self,
        host: &mut H,
        direction: Direction,
    ) -> Result<(), Abort> {
        let from = host.cursor();
        let index = load_index(&mut self.index, &*host)?;
        let (position, at) = index
            .step(from, direction)
            .and_then(|i| index.get(i).map(|entry| (i, entry.location)))
            .ok_or(UserError::NoMessages)?;

        self.close_panel(host);
        self.current_index = Some(position);
        host.set_cursor(at);
        host.center_on(at);
        self.pending_recenter = true;
        debug!(%from, %at, position, ?direction, "navigated");
        Ok(())
    }

    /// Show the entry on the cursor line.
    fn display<H: EditorHost + PanelHost>(&mut self, host: &mut H) -> Result<(), Abort> {
        let cursor = host.cursor();
        let selected = self.current_index;
        let index = load_index(&mut self.index, &*host)?;

        let on_cursor_line =
            |i: &usize| index.get(*i).is_some_and(|entry| entry.location.line == cursor.line);
        let position = selected
            .filter(on_cursor_line)
            .or_else(|| index.find_at_line(cursor.line))
            .ok_or(UserError::NoMessageOnLine { line: cursor.line })?;
        let entry = index
            .get(position)
            .ok_or(UserError::NoMessageOnLine { line: cursor.line })?;

        let _span = debug_span!("display", position, location = %entry.location).entered();

        let viewport = host.viewport_metrics().working_area();
        let anchor = host.screen_point(entry.location);
        let layout = self.placer.layout(viewport, anchor, &entry.tokens);
        let rect = layout.placement.rect;

        let mut content = PanelContent::new(layout.block, entry.severity);
        if self.placer.config().title_row {
            content = content.with_title(&title(
                entry.severity,
                position,
                index.len(),
                self.config.show_position,
            ));
        }
        self.current_index = Some(position);

        let origin = self.origin_of(host.active_view());
        if self.session.is_origin(origin) {
            self.session.replace_content(host, content)?;
            self.session.reposition(host, rect.x, rect.y)?;
            self.session.resize(host, rect.width, rect.height)?;
            debug!(?rect, "panel updated in place");
        } else {
            self.close_panel(host);
            self.session.open(host, content, rect, origin)?;
        }
        Ok(())
    }

    /// The editor view behind `active`: a focused panel stands in for the
    /// view it was opened from.
    fn origin_of(&self, active: ViewId) -> ViewId {
        if self.session.is_self(active) {
            self.session.origin().unwrap_or(active)
        } else {
            active
        }
    }

    /// Close the panel. Focus goes back to the origin only when the panel
    /// holds it; otherwise the user already moved focus somewhere else.
    fn close_panel<H: EditorHost + PanelHost>(&mut self, host: &mut H) {
        let refocus = self.session.is_self(host.active_view());
        self.session.close(host, refocus);
    }

    fn panel_quit<H: EditorHost + PanelHost>(
        &mut self,
        host: &mut H,
        view: ViewId,
    ) -> Result<(), Abort> {
        if self.session.is_self(view) || self.session.is_origin(view) {
            self.close_panel(host);
            Ok(())
        } else if self.session.was_closed(view) {
            debug!(%view, "quit for a panel already closed");
            Ok(())
        } else if self.session.is_open() {
            debug!(%view, "quit for an unrelated view");
            Ok(())
        } else {
            Err(InvariantViolation::NoOrigin { view }.into())
        }
    }

    /// Drop the panel, the index and the selection.
    fn reset<H: EditorHost + PanelHost>(&mut self, host: &mut H) {
        self.close_panel(host);
        self.index = None;
        self.current_index = None;
        debug!("state reset");
    }

    /// Location of the selected entry.
    #[must_use]
    pub fn current_location(&self) -> Option<Location> {
        let index = self.index.as_ref()?;
        index.get(self.current_index?).map(|entry| entry.location)
    }
}
