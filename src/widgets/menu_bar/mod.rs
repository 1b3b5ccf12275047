// SPDX-License-Identifier: MPL-2.0

//! Horizontal menu bar (tab strip) widget.
//!
//! A row of tappable labels with a single active item, marked by an animated
//! highlight drawn either as an underline or as a rounded segment. Spare
//! width is shared between the items; when they do not fit, the strip
//! scrolls and keeps the active item in view.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::menu_bar::{self, MenuBar, MenuBarDelegate, MenuBarMessage, MenuBarState};
//!
//! // In your app state
//! struct AppModel {
//!     menu: MenuBarState,
//!     styler: BoldActive,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Menu(MenuBarMessage),
//!     Frame(Instant),
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     MenuBar::new(&self.menu, Message::Menu).into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Menu(msg) => menu_bar::update(&mut self.menu, msg, Some(&mut self.styler)),
//!         Message::Frame(now) => menu_bar::animate(&mut self.menu, now),
//!     }
//! }
//! ```

mod animation;
mod delegate;
mod error;
mod highlight;
mod item;
mod layout;
mod message;
mod metrics;
mod state;
mod widget;

pub use animation::{HIGHLIGHT_DURATION, Interpolate, Transition};
pub use delegate::MenuBarDelegate;
pub use error::Rejected;
pub use highlight::{
    HighlightGeometry, HighlightRect, VerticalPlacement, highlight_geometry, reveal_offset,
};
pub use item::{Decoration, ItemId, MenuButton};
pub use layout::{ItemFrame, ItemPadding, StripLayout, distribute_leftover, equalize};
pub use message::MenuBarMessage;
pub use metrics::{Distribution, EdgeInsets, HighlightStyle, LayoutMetrics, TextMetrics};
pub use state::MenuBarState;
pub use widget::{MenuBar, animate, update};
