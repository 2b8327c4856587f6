//! Kitchen Salt Calc - Main entry point
//!
//! Handles application-level logging initialization, resolution of the
//! starting weight from an optional query-string argument, and the window
//! launch.

use std::path::PathBuf;

use iced::window;
use iced::Size;

use ksc_core::logging::{init_tracing_with_file, LogLevel};
use ksc_core::query::parse_initial_weight;

mod app;
mod handlers;
mod pages;
mod theme;
mod widgets;

use app::App;

/// Default settings store: .config/ (relative to current working directory)
fn default_store_dir() -> PathBuf {
    PathBuf::from(".config")
}

/// Default logs folder: .logs/ (relative to current working directory)
fn default_logs_dir() -> PathBuf {
    PathBuf::from(".logs")
}

fn main() -> iced::Result {
    let _log_guard = init_tracing_with_file(LogLevel::Info, &default_logs_dir());

    tracing::info!("Kitchen Salt Calc starting");
    tracing::info!("Core version: {}", ksc_core::version());

    // `kitchen-salt-calc "weight=900"` starts with the scale reading 900 g
    let raw_query = std::env::args().nth(1).unwrap_or_default();
    let initial_weight = parse_initial_weight(&raw_query, app::DEFAULT_GROSS_WEIGHT_G);
    tracing::info!("Initial gross weight: {} g", initial_weight);

    let store_dir = default_store_dir();
    iced::application(
        move || App::new(store_dir.clone(), initial_weight),
        App::update,
        App::view,
    )
    .title(App::title)
    .subscription(App::subscription)
    .theme(App::theme)
    .window(window::Settings {
        size: Size::new(960.0, 760.0),
        ..Default::default()
    })
    .run()
}
