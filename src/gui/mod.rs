//! GUI module for the widget showcase.
//!
//! This module contains the egui-based user interface components
//! including the main application window, the controls tab and the log view.

mod app;
mod controls;
mod log_view;

pub use app::ShowcaseApp;
