#![forbid(unsafe_code)]

//! Core: cell geometry for viewport-relative panel placement.

pub mod geometry;

pub use geometry::{Point, Rect, Size};
