#![forbid(unsafe_code)]

//! Gutter message tooltips for editor hosts.
//!
//! A host implements [`EditorHost`] and [`PanelHost`], owns one
//! [`Controller`] and forwards its notifications as [`HostEvent`]s. The
//! controller keeps an ordered index of the document's messages, moves the
//! cursor between them, and shows the messages under the cursor in a
//! floating panel placed next to the anchor.
//!
//! # Crates
//!
//! - `gtip-core` - cell geometry
//! - `gtip-text` - tokens, display width, word wrapping
//! - `gtip-messages` - message model, merge/order, navigation
//! - `gtip-panel` - placement and the panel session
//!
//! # Example
//!
//! ```ignore
//! use gtip::{Controller, HostEvent, TooltipConfig};
//!
//! let mut controller = Controller::new(TooltipConfig::default());
//! controller.handle(&mut host, HostEvent::command(&["dnext"]))?;
//! controller.handle(&mut host, HostEvent::Escape)?;
//! ```

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod host;
#[cfg(feature = "subscriber")]
pub mod logging;

// --- Controller surface ----------------------------------------------------

pub use command::{Action, CommandError, complete, parse};
pub use config::TooltipConfig;
pub use controller::Controller;
pub use error::{InvariantViolation, UserError};
pub use event::HostEvent;
pub use host::{EditorHost, ViewportMetrics};

// --- Building blocks -------------------------------------------------------

pub use gtip_core::geometry::{Point, Rect, Size};
pub use gtip_messages::{Direction, Location, MergedEntry, MessageIndex, RawMessage, Severity};
pub use gtip_panel::{
    PanelContent, PanelHost, PanelOptions, PanelPlacer, PlacementConfig, SessionError,
    TooltipSession, ViewId,
};
pub use gtip_text::{Token, WrappedBlock};
