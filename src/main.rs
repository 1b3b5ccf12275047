// SPDX-License-Identifier: MPL-2.0

mod app;

fn main() -> cosmic::iced::Result {
    init_tracing();

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(app::INITIAL_WIDTH, app::INITIAL_HEIGHT))
        .size_limits(cosmic::iced::Limits::NONE.min_width(360.0).min_height(180.0));

    cosmic::app::run::<app::AppModel>(settings, ())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("warn,menubar=info"),
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
