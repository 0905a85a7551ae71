#![forbid(unsafe_code)]

//! Text handling for gtip tooltips.
//!
//! - [`Token`] - a word (with its trailing space) or a hard line break
//! - [`tokenize`] - turn message text into tokens
//! - [`wrap_tokens`] - greedy word wrap into a padded rectangular [`WrappedBlock`]
//! - [`display_width`] - visual width in terminal cells
//!
//! # Example
//! ```
//! use gtip_text::{tokenize, wrap_tokens};
//!
//! // One column of the 12 is reserved as a right margin.
//! let block = wrap_tokens(&tokenize("hello world foo"), 12);
//! assert_eq!(block.lines, vec!["hello world", "foo        "]);
//! assert_eq!(block.width, 11);
//! assert_eq!(block.height, 2);
//! ```

pub mod token;
pub mod width;
pub mod wrap;

pub use token::{Token, append_tokens, join_tokens, tokenize};
pub use width::{display_width, pad_to_width, truncate_to_width};
pub use wrap::{WrappedBlock, wrap_tokens};
