#![forbid(unsafe_code)]

//! Controller failures.
//!
//! [`UserError`]s end up on the status line and never leave the controller.
//! [`InvariantViolation`]s mean the controller and host disagree about panel
//! state; they abort the current event and are returned to the host.

use std::fmt;

use gtip_panel::{SessionError, ViewId};

use crate::command::CommandError;

/// Problems caused by what the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// The active document has no messages.
    NoMessages,
    /// Nothing is attached to the cursor line.
    NoMessageOnLine { line: u32 },
    Command(CommandError),
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMessages => write!(f, "No messages"),
            Self::NoMessageOnLine { line } => write!(f, "No message on line {line}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for UserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Command(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<CommandError> for UserError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

/// Controller bugs or host protocol mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    Session(SessionError),
    /// A panel event arrived while no panel was open or recently closed.
    NoOrigin { view: ViewId },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(err) => write!(f, "tooltip session invariant violated: {err}"),
            Self::NoOrigin { view } => {
                write!(f, "panel event for {view} with no tooltip origin recorded")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Session(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<SessionError> for InvariantViolation {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}
