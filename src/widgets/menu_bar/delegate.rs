// SPDX-License-Identifier: MPL-2.0

//! Callbacks the host implements to follow the menu bar.

use super::item::MenuButton;

/// Receives selection changes and decorates menu items.
///
/// The delegate is borrowed only for the duration of the call that notifies
/// it; the menu bar never stores it. Both methods default to doing nothing.
pub trait MenuBarDelegate {
    /// Called once after the active index changed, before the highlight moves.
    fn on_active_change(&mut self, _index: usize) {}

    /// Called for every item when the item set is created and after every
    /// selection change, so the host can restyle active and inactive labels.
    fn decorate(&mut self, _item: &mut MenuButton, _index: usize) {}
}
