// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the menu bar widget.

use super::item::ItemId;

/// Messages emitted by the menu bar widget.
///
/// These messages should be wrapped by the parent's message type and handled
/// in the parent's update function, usually through [`super::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuBarMessage {
    /// User tapped an item.
    Tap(ItemId),

    /// The strip was scrolled.
    Scroll {
        /// The new horizontal scroll offset.
        offset: f32,
        /// Width of the visible part of the strip.
        viewport_width: f32,
    },
}
