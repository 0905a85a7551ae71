#![forbid(unsafe_code)]

//! Gutter messages: the raw diagnostics a host reports, their total order,
//! the merged per-location index, and wrap-around navigation over it.
//!
//! # Example
//! ```
//! use gtip_messages::{Location, MessageIndex, RawMessage, Severity};
//!
//! let index = MessageIndex::load([
//!     RawMessage::new("unused variable", Location::new(3, 4), Severity::Warn, "rustc"),
//!     RawMessage::new("missing semicolon", Location::new(1, 9), Severity::Error, "rustc"),
//! ]);
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.next_from(Location::new(1, 9)), Some(1));
//! assert_eq!(index.next_from(Location::new(3, 4)), Some(0));
//! ```

pub mod message;
pub mod navigate;
pub mod order;
pub mod store;

pub use message::{Location, ParseSeverityError, RawMessage, Severity, SortedMessage};
pub use navigate::{Direction, navigate};
pub use order::compare_messages;
pub use store::{BULLET, MergedEntry, MessageIndex, compose_entry};
