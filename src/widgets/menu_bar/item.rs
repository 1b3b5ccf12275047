// SPDX-License-Identifier: MPL-2.0

//! Item handles for the menu bar widget.

use cosmic::iced::Color;

/// Default label size when the delegate does not override it.
pub const DEFAULT_FONT_SIZE: u16 = 14;

/// Identity of a rendered menu item.
///
/// The generation changes every time the item set is replaced, so a tap that
/// was queued against an older set never resolves to an item of the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId {
    pub generation: u64,
    pub index: usize,
}

/// Visual attributes the delegate may change on a menu item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub bold: bool,
    pub font_size: u16,
    /// Label color; `None` uses the theme's text color.
    pub color: Option<Color>,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            bold: false,
            font_size: DEFAULT_FONT_SIZE,
            color: None,
        }
    }
}

/// A single tappable entry of the menu bar.
///
/// Index and label are fixed at creation; only the decoration is mutable.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    id: ItemId,
    label: String,
    selected: bool,
    /// Appearance applied when rendering, set by the delegate.
    pub decoration: Decoration,
}

impl MenuButton {
    pub(crate) fn new(generation: u64, index: usize, label: impl Into<String>) -> Self {
        Self {
            id: ItemId { generation, index },
            label: label.into(),
            selected: false,
            decoration: Decoration::default(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Position of the item in the bar, starting at 0.
    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if this is the active item.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
