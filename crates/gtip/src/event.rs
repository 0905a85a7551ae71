#![forbid(unsafe_code)]

//! Host notifications the controller reacts to.

use gtip_core::geometry::Point;
use gtip_panel::ViewId;

/// Everything the host forwards to [`Controller::handle`](crate::Controller::handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The user ran the command with these arguments.
    Command { args: Vec<String> },
    /// The active document was saved.
    Saved,
    /// Another document became active.
    DocumentSwitched,
    /// The host's message set changed without a save, for example when an
    /// asynchronous linter reported.
    MessagesChanged,
    /// A view was split or unsplit.
    Split,
    TabSwitched,
    /// The active view scrolled.
    Scrolled,
    /// The editor entered a command or shell prompt.
    ModeChanged,
    Escape,
    /// A mouse button went down in `view` at cell `at` of the working area.
    MousePress { view: ViewId, at: Point },
    /// The host is about to quit `view`, which it believes is a tooltip panel.
    PanelQuitRequested { view: ViewId },
}

impl HostEvent {
    /// Build a command event from borrowed arguments.
    #[must_use]
    pub fn command<S: AsRef<str>>(args: &[S]) -> Self {
        Self::Command {
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    /// Short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Command { .. } => "command",
            Self::Saved => "saved",
            Self::DocumentSwitched => "document_switched",
            Self::MessagesChanged => "messages_changed",
            Self::Split => "split",
            Self::TabSwitched => "tab_switched",
            Self::Scrolled => "scrolled",
            Self::ModeChanged => "mode_changed",
            Self::Escape => "escape",
            Self::MousePress { .. } => "mouse_press",
            Self::PanelQuitRequested { .. } => "panel_quit_requested",
        }
    }
}
