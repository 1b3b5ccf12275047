// SPDX-License-Identifier: MPL-2.0

use crate::widgets::menu_bar::{EdgeInsets, HighlightStyle, MenuBarState};
use cosmic::cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Space between menu items, in pixels
    pub item_spacing: u16,
    /// Height of the underline highlight, in pixels
    pub highlight_thickness: u16,
    /// Padding reserved at both ends of the strip, in pixels
    pub content_inset: u16,
    /// Highlight shape of the main menu bar
    pub style: HighlightStyle,
    /// Item activated when the menu is populated
    pub default_active: usize,
    /// Render the active label in bold
    pub bold_active: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_spacing: 24,
            highlight_thickness: 4,
            content_inset: 16,
            style: HighlightStyle::Underline,
            default_active: 2,
            bold_active: true,
        }
    }
}

impl Config {
    /// Pushes the configured metrics into a menu bar.
    pub fn apply(&self, state: &mut MenuBarState) {
        state.set_item_spacing(f32::from(self.item_spacing));
        state.set_highlight_thickness(f32::from(self.highlight_thickness));
        state.set_content_edge_insets(EdgeInsets::symmetric(f32::from(self.content_inset)));
        state.set_style(self.style);
    }
}
