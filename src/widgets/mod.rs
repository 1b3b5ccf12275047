// SPDX-License-Identifier: MPL-2.0

//! Custom widgets.

pub mod menu_bar;

pub use menu_bar::{
    Decoration, EdgeInsets, HighlightStyle, ItemId, LayoutMetrics, MenuBar, MenuBarDelegate,
    MenuBarMessage, MenuBarState, MenuButton,
};
