//! Widget Showcase - a desktop demo that logs every widget interaction.

mod core;
mod gui;

use crate::core::config::AppSettings;
use gui::ShowcaseApp;
use tracing_subscriber::EnvFilter;

/// Window title.
const APP_TITLE: &str = "Лабораторная работа №1";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = AppSettings::load();
    let options = native_options(&settings);

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ShowcaseApp::new(cc, settings)))),
    )
}

/// Fixed-size window at the configured size.
fn native_options(settings: &AppSettings) -> eframe::NativeOptions {
    let (width, height) = settings.window_size;
    eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    }
}
