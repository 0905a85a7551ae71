#![forbid(unsafe_code)]

//! Floating tooltip panels: where they go and how long they live.
//!
//! - [`PanelPlacer`] - pure geometry: wrap width, flip and clamp fallbacks
//! - [`PanelContent`] - the rows a panel displays
//! - [`TooltipSession`] - owns the single open panel through a [`PanelHost`]

pub mod content;
pub mod placement;
pub mod session;

pub use content::{PanelContent, PanelOptions};
pub use placement::{
    HorizontalAlign, PanelLayout, PanelPlacer, Placement, PlacementConfig, VerticalSide,
    WidthChoice,
};
pub use session::{PanelHost, SessionError, TooltipSession, ViewId};
