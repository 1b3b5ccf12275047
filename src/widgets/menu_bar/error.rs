// SPDX-License-Identifier: MPL-2.0

//! Reasons a menu bar request is ignored.

use super::item::ItemId;

/// Why a request left the menu bar unchanged.
///
/// The host never sees these; they are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    #[error("menu bar received an empty label list")]
    EmptyItems,
    #[error("index {index} is out of range for {count} items")]
    OutOfRange { index: usize, count: usize },
    #[error("item {0} is already active")]
    AlreadyActive(usize),
    #[error("item {0:?} does not belong to the current item set")]
    UnknownItem(ItemId),
}
