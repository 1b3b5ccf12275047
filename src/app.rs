// SPDX-License-Identifier: MPL-2.0

use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Color, Length, Size, Subscription, window};
use cosmic::prelude::*;
use cosmic::widget;
use menubar::config::Config;
use menubar::widgets::menu_bar::{
    self, EdgeInsets, HighlightStyle, MenuBar, MenuBarDelegate, MenuBarMessage, MenuBarState,
    MenuButton,
};
use std::time::Instant;

/// Initial window size.
pub const INITIAL_WIDTH: f32 = 480.0;
pub const INITIAL_HEIGHT: f32 = 320.0;

const PRIMARY_LABELS: [&str; 5] = [
    "Menu 1",
    "Menu 2",
    "Menu Menu 1",
    "Menu",
    "Last Menu may scroll",
];
const STYLE_LABELS: [&str; 2] = ["Underline", "Segment"];

fn brown() -> Color {
    Color::from_rgb(0.6, 0.4, 0.2)
}

/// Restyles labels so the active one stands out and remembers the last change.
#[derive(Debug, Clone, Default)]
pub struct LabelStyler {
    pub bold_active: bool,
    pub last_change: Option<usize>,
}

impl MenuBarDelegate for LabelStyler {
    fn on_active_change(&mut self, index: usize) {
        self.last_change = Some(index);
    }

    fn decorate(&mut self, item: &mut MenuButton, _index: usize) {
        let active = item.is_selected();
        item.decoration.bold = self.bold_active && active;
        item.decoration.font_size = if active { 20 } else { 14 };
    }
}

/// Delegate of the style picker: its selection decides the highlight style
/// of the primary menu bar.
#[derive(Debug, Clone, Default)]
pub struct StylePicker {
    pub labels: LabelStyler,
    /// Style to apply to the primary bar once the picker update is done.
    pub pending: Option<HighlightStyle>,
}

impl MenuBarDelegate for StylePicker {
    fn on_active_change(&mut self, index: usize) {
        self.pending = Some(if index == 0 {
            HighlightStyle::Underline
        } else {
            HighlightStyle::Segment
        });
        self.labels.on_active_change(index);
    }

    fn decorate(&mut self, item: &mut MenuButton, index: usize) {
        self.labels.decorate(item, index);
    }
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Configuration data for the primary menu bar.
    pub config: Config,
    /// Menu bar whose style is driven by the picker.
    pub primary: MenuBarState,
    pub primary_labels: LabelStyler,
    /// Two-item menu bar choosing the primary bar's highlight style.
    pub style_picker: MenuBarState,
    pub picker: StylePicker,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    UpdateConfig(Config),
    Primary(MenuBarMessage),
    StylePicker(MenuBarMessage),
    WindowResized(Size),
    Frame(Instant),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.hojjatabdollahi.MenuBar";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let config = cosmic_config::Config::new(Self::APP_ID, Config::VERSION)
            .map(|context| match Config::get_entry(&context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for error in errors {
                        tracing::warn!(%error, "invalid menu bar config entry");
                    }
                    config
                }
            })
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "menu bar config unavailable, using defaults");
                Config::default()
            });

        let viewport_width = INITIAL_WIDTH - f32::from(cosmic::theme::spacing().space_m) * 2.0;

        let mut primary_labels = LabelStyler {
            bold_active: config.bold_active,
            last_change: None,
        };
        let mut primary = MenuBarState::new();
        primary.set_viewport_width(viewport_width);
        primary.set_border_color(brown());
        config.apply(&mut primary);
        primary.set_items(PRIMARY_LABELS, config.default_active, Some(&mut primary_labels));

        let mut picker = StylePicker {
            labels: LabelStyler {
                bold_active: true,
                last_change: None,
            },
            pending: None,
        };
        let mut style_picker = MenuBarState::new();
        style_picker.set_viewport_width(viewport_width);
        style_picker.set_item_spacing(24.0);
        style_picker.set_highlight_thickness(6.0);
        style_picker.set_content_edge_insets(EdgeInsets::symmetric(16.0));
        style_picker.set_style(HighlightStyle::Segment);
        style_picker.set_highlight_color(brown());
        let initial = match config.style {
            HighlightStyle::Underline => 0,
            HighlightStyle::Segment => 1,
        };
        style_picker.set_items(STYLE_LABELS, initial, Some(&mut picker));

        tracing::info!(style = ?config.style, "menu bar demo started");

        let mut app = AppModel {
            core,
            config,
            primary,
            primary_labels,
            style_picker,
            picker,
        };

        // Create a startup command that sets the window title.
        let command = app.update_title();

        (app, command)
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        let content = widget::column::with_capacity(6)
            .push(widget::text::title4("Menu bar"))
            .push(MenuBar::new(&self.primary, Message::Primary))
            .push(widget::text::caption(activation_caption(
                "Menu",
                &self.primary,
                self.primary_labels.last_change,
            )))
            .push(widget::text::title4("Highlight style"))
            .push(MenuBar::new(&self.style_picker, Message::StylePicker))
            .push(widget::text::caption(activation_caption(
                "Style",
                &self.style_picker,
                self.picker.labels.last_change,
            )))
            .spacing(space_s);

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let mut subscriptions = vec![
            // Watch for application configuration changes.
            self.core()
                .watch_config::<Config>(Self::APP_ID)
                .map(|update| Message::UpdateConfig(update.config)),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ];

        // Only redraw every frame while something is moving.
        if self.primary.is_animating() || self.style_picker.is_animating() {
            subscriptions.push(window::frames().map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::UpdateConfig(config) => {
                restyle(&mut self.primary, &mut self.primary_labels, &config);
                self.config = config;
            }

            Message::Primary(msg) => {
                return menu_bar::update(&mut self.primary, msg, Some(&mut self.primary_labels));
            }

            Message::StylePicker(msg) => {
                let task = menu_bar::update(&mut self.style_picker, msg, Some(&mut self.picker));
                if let Some(style) = self.picker.pending.take() {
                    self.primary.set_style(style);
                }
                return task;
            }

            Message::WindowResized(size) => {
                let width = size.width - f32::from(cosmic::theme::spacing().space_m) * 2.0;
                self.primary.set_viewport_width(width);
                self.style_picker.set_viewport_width(width);
            }

            Message::Frame(now) => {
                return Task::batch([
                    menu_bar::animate(&mut self.primary, now),
                    menu_bar::animate(&mut self.style_picker, now),
                ]);
            }
        }
        Task::none()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let window_title = String::from("Menu Bar");

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }
}

/// Applies a changed config to the primary bar and restyles its labels.
fn restyle(state: &mut MenuBarState, labels: &mut LabelStyler, config: &Config) {
    labels.bold_active = config.bold_active;
    config.apply(state);
    state.redecorate(labels);
}

/// Describes the active item of a menu bar and its last reported change.
fn activation_caption(name: &str, state: &MenuBarState, last_change: Option<usize>) -> String {
    let active = state.active_item().map_or("none", MenuButton::label);
    match last_change {
        Some(index) => format!("{name}: {active} (changed to {index})"),
        None => format!("{name}: {active}"),
    }
}
