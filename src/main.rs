//! Quote Universe - an inspirational quote carousel over a twinkling star field
//! Built with iced for a calm, full-window dark UI

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use std::time::Instant;

use tracing_subscriber::EnvFilter;

use crate::features::Settings;

fn main() -> iced::Result {
    // Initialize tracing for logging, RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quote_universe=info")),
        )
        .init();

    let settings = Settings::load();
    let window = app::App::window_settings(&settings);

    iced::application(
        move || app::App::with_settings(settings.clone(), Instant::now()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .window(window)
    .subscription(app::App::subscription)
    .antialiasing(true)
    .run()
}
