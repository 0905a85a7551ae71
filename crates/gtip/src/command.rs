#![forbid(unsafe_code)]

//! The user-facing command and its argument completion.
//!
//! One command with a single optional argument:
//!
//! | Argument  | Action                         |
//! |-----------|--------------------------------|
//! | *(none)*  | [`Action::Next`]               |
//! | `next`    | [`Action::Next`]               |
//! | `prev`    | [`Action::Prev`]               |
//! | `display` | [`Action::Display`]            |
//! | `dnext`   | [`Action::DisplayNext`]        |
//! | `dprev`   | [`Action::DisplayPrev`]        |

use std::fmt;
use std::str::FromStr;

use gtip_messages::Direction;

/// Argument names in completion order.
pub const ARGUMENTS: [&str; 5] = ["next", "prev", "display", "dnext", "dprev"];

/// A parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    Display,
    /// Navigate forward, then display.
    DisplayNext,
    /// Navigate backward, then display.
    DisplayPrev,
}

impl Action {
    /// Navigation step this action performs, if any.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Next | Self::DisplayNext => Some(Direction::Next),
            Self::Prev | Self::DisplayPrev => Some(Direction::Prev),
            Self::Display => None,
        }
    }

    /// Whether the action ends by showing a panel.
    #[must_use]
    pub const fn displays(self) -> bool {
        matches!(self, Self::Display | Self::DisplayNext | Self::DisplayPrev)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Display => "display",
            Self::DisplayNext => "dnext",
            Self::DisplayPrev => "dprev",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "display" => Ok(Self::Display),
            "dnext" => Ok(Self::DisplayNext),
            "dprev" => Ok(Self::DisplayPrev),
            other => Err(CommandError::UnknownArgument(other.to_string())),
        }
    }
}

/// Malformed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownArgument(String),
    /// More than one argument; carries the count given.
    TooManyArguments(usize),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(
                f,
                "unknown argument \"{arg}\" (expected one of: {})",
                ARGUMENTS.join(", ")
            ),
            Self::TooManyArguments(n) => write!(f, "expected at most 1 argument, got {n}"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse command arguments. No arguments means [`Action::Next`].
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Action, CommandError> {
    match args {
        [] => Ok(Action::Next),
        [arg] => arg.as_ref().parse(),
        _ => Err(CommandError::TooManyArguments(args.len())),
    }
}

/// Argument names starting with `partial` (case-sensitive).
///
/// Only the first argument position completes.
#[must_use]
pub fn complete(partial: &str, arg_position: usize) -> Vec<&'static str> {
    if arg_position != 0 {
        return Vec::new();
    }
    ARGUMENTS
        .iter()
        .copied()
        .filter(|name| name.starts_with(partial))
        .collect()
}
