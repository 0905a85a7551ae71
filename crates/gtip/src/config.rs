#![forbid(unsafe_code)]

//! Controller configuration.

use gtip_panel::{PanelOptions, PlacementConfig};

/// Tooltip behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Panel geometry tuning.
    pub placement: PlacementConfig,
    /// Put the `i/n` entry position in the title row (default: true).
    pub show_position: bool,
    /// Hints passed to the host when creating panels.
    pub panel: PanelOptions,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: PlacementConfig::default(),
            show_position: true,
            panel: PanelOptions::default(),
        }
    }
}

impl TooltipConfig {
    #[must_use]
    pub fn placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn show_position(mut self, enabled: bool) -> Self {
        self.show_position = enabled;
        self
    }

    #[must_use]
    pub fn panel(mut self, panel: PanelOptions) -> Self {
        self.panel = panel;
        self
    }
}
