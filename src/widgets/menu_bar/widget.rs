// SPDX-License-Identifier: MPL-2.0

//! Menu bar widget builder and rendering.

use super::delegate::MenuBarDelegate;
use super::highlight::HighlightRect;
use super::item::MenuButton;
use super::message::MenuBarMessage;
use super::metrics::HighlightStyle;
use super::state::MenuBarState;
use cosmic::iced::alignment::{Horizontal, Vertical};
use cosmic::iced::widget::scrollable::{self, AbsoluteOffset};
use cosmic::iced::widget::{Stack, container};
use cosmic::iced::{Background, Border, Color, Length, Padding};
use cosmic::prelude::*;
use cosmic::widget;
use std::time::Instant;

/// Builder for the menu bar widget.
///
/// # Example
///
/// ```ignore
/// MenuBar::new(&self.menu_state, Message::Menu)
///     .item_view(|item, active| widget::text::heading(item.label().to_string()).into())
///     .into()
/// ```
pub struct MenuBar<'a, Message>
where
    Message: Clone + 'static,
{
    state: &'a MenuBarState,
    on_message: Box<dyn Fn(MenuBarMessage) -> Message + 'a>,
    item_view: Option<Box<dyn Fn(&MenuButton, bool) -> Element<'a, Message> + 'a>>,
    height: Option<f32>,
}

impl<'a, Message> MenuBar<'a, Message>
where
    Message: Clone + 'static,
{
    /// Creates a new menu bar widget.
    ///
    /// # Arguments
    ///
    /// - `state`: The menu bar state (owned by parent)
    /// - `on_message`: Function to wrap `MenuBarMessage` into the parent's `Message` type
    pub fn new(
        state: &'a MenuBarState,
        on_message: impl Fn(MenuBarMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            on_message: Box::new(on_message),
            item_view: None,
            height: None,
        }
    }

    /// Overrides the strip height from the state's metrics.
    ///
    /// Items and the highlight are laid out against this height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    fn strip_height(&self) -> f32 {
        self.height.unwrap_or(self.state.metrics().strip_height)
    }

    /// Sets a custom label renderer.
    ///
    /// The function receives the item and whether it is active. The result is
    /// placed inside the item's tappable area, which keeps its computed width.
    pub fn item_view<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&MenuButton, bool) -> Element<'a, Message> + 'a,
    {
        self.item_view = Some(Box::new(renderer));
        self
    }

    /// Renders a label from its decoration.
    fn default_item_view(item: &MenuButton, _is_active: bool) -> Element<'a, Message> {
        let decoration = item.decoration;
        let mut text =
            widget::text(item.label().to_string()).size(f32::from(decoration.font_size));

        if decoration.bold {
            text = text.font(cosmic::font::bold());
        }
        if let Some(color) = decoration.color {
            text = text.class(cosmic::style::Text::Color(color));
        }

        text.into()
    }

    fn render_item(&self, item: &MenuButton, is_active: bool) -> Element<'a, Message> {
        if let Some(ref renderer) = self.item_view {
            renderer(item, is_active)
        } else {
            Self::default_item_view(item, is_active)
        }
    }

    /// Renders the row of tappable items at their computed widths.
    fn render_items(&self) -> Element<'a, Message> {
        let state = self.state;
        let layout = state.layout();
        let metrics = state.metrics();
        let active = state.active_index();

        let mut row = widget::row::with_capacity(state.item_count()).spacing(metrics.item_spacing);

        for ((item, frame), padding) in state
            .items()
            .iter()
            .zip(&layout.frames)
            .zip(&layout.paddings)
        {
            let is_active = active == Some(item.index());
            let label = widget::container(self.render_item(item, is_active))
                .width(Length::Fixed(frame.width))
                .height(Length::Fixed(self.strip_height()))
                .padding(Padding {
                    top: 0.0,
                    right: padding.trailing,
                    bottom: 0.0,
                    left: padding.leading,
                })
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center);

            let on_message = &self.on_message;
            row = row.push(widget::mouse_area(label).on_press(on_message(MenuBarMessage::Tap(
                item.id(),
            ))));
        }

        row.into()
    }

    /// Renders the highlight, clipped to the content bounds.
    fn render_highlight(&self) -> Option<Element<'a, Message>> {
        let state = self.state;
        let metrics = state.metrics();
        let geometry = state.highlight()?;
        let rect = geometry.rect(self.strip_height());
        let (x, width) = clip_span(&rect, state.layout().content_width)?;

        let bar = widget::container(
            widget::Space::with_width(Length::Fixed(width)).height(Length::Fixed(rect.height)),
        )
        .class(filled(metrics.highlight_color, geometry.corner_radius));

        let placed = widget::column::with_capacity(2)
            .push(widget::Space::with_height(Length::Fixed(rect.y)))
            .push(
                widget::row::with_capacity(2)
                    .push(widget::Space::with_width(Length::Fixed(x)))
                    .push(bar),
            );

        Some(placed.into())
    }

    /// Builds the widget and returns it as an Element.
    pub fn build(self) -> Element<'a, Message> {
        let state = self.state;
        let metrics = *state.metrics();
        let content_width = state.layout().content_width;
        let strip_height = self.strip_height();

        let items = self.render_items();
        let highlight = self.render_highlight();

        // Segments sit behind the labels, underlines on top of them.
        let layers: Vec<Element<'a, Message>> = match (state.style(), highlight) {
            (HighlightStyle::Segment, Some(highlight)) => vec![highlight, items],
            (HighlightStyle::Underline, Some(highlight)) => vec![items, highlight],
            (_, None) => vec![items],
        };

        let content = Stack::with_children(layers)
            .width(Length::Fixed(content_width))
            .height(Length::Fixed(strip_height));

        let on_message = self.on_message;
        let strip = widget::scrollable::horizontal(content)
            .id(state.scroll_id().clone())
            .width(Length::Fill)
            .height(Length::Fixed(strip_height))
            .on_scroll(move |viewport| {
                on_message(MenuBarMessage::Scroll {
                    offset: viewport.absolute_offset().x,
                    viewport_width: viewport.bounds().width,
                })
            });

        // The border stays outside the scrollable so it never moves.
        let border = widget::container(
            widget::Space::with_width(Length::Fill)
                .height(Length::Fixed(metrics.border_thickness)),
        )
        .width(Length::Fill)
        .class(filled(metrics.border_color, 0.0));

        widget::column::with_capacity(2)
            .push(strip)
            .push(border)
            .width(Length::Fill)
            .into()
    }
}

impl<'a, Message> From<MenuBar<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'static,
{
    fn from(menu_bar: MenuBar<'a, Message>) -> Self {
        menu_bar.build()
    }
}

/// Routes a widget message to the state.
pub fn update<T>(
    state: &mut MenuBarState,
    message: MenuBarMessage,
    delegate: Option<&mut dyn MenuBarDelegate>,
) -> Task<T> {
    match message {
        MenuBarMessage::Tap(id) => state.tap(id, delegate),
        MenuBarMessage::Scroll {
            offset,
            viewport_width,
        } => {
            state.sync_scroll_offset(offset);
            state.set_viewport_width(viewport_width);
        }
    }
    Task::none()
}

/// Advances the state's transitions and scrolls the strip for this frame.
pub fn animate<T>(state: &mut MenuBarState, now: Instant) -> Task<T> {
    match state.tick(now) {
        Some(x) => scrollable::scroll_to(state.scroll_id().clone(), AbsoluteOffset { x, y: 0.0 }),
        None => Task::none(),
    }
}

/// Container class painting a solid, optionally rounded background.
fn filled(color: Color, radius: f32) -> cosmic::style::Container {
    cosmic::style::Container::custom(move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    })
}

/// Clips the highlight to `[0, content_width]`, returning its left edge and
/// visible width, or `None` if nothing is left.
fn clip_span(rect: &HighlightRect, content_width: f32) -> Option<(f32, f32)> {
    let left = rect.x.max(0.0);
    let right = (rect.x + rect.width).min(content_width);
    (right > left).then_some((left, right - left))
}
