//! Configuration and settings module.
//!
//! This module handles persistent user preferences: window size, log
//! capacity, timer period, theme and the option lists shown by the controls.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::{self, AppError};
use super::progress::DEFAULT_CAPACITY;
use super::timer::{DEFAULT_PERIOD_MS, MAX_PERIOD_MS, MIN_PERIOD_MS};

/// Directory name under the user's config directory.
const APP_DIR_NAME: &str = "widget-showcase";

/// Settings filename for persistence.
const SETTINGS_FILENAME: &str = "config.json";

/// Application settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Window size on startup (width, height).
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),

    /// Number of log lines shown as a full progress bar.
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,

    /// Interval between elapsed-time refreshes, in milliseconds.
    #[serde(default = "default_timer_period_ms")]
    pub timer_period_ms: u64,

    /// Dark or light visuals.
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    /// Entries of the drop-down list.
    #[serde(default = "default_combobox_options")]
    pub combobox_options: Vec<String>,

    /// Slider bounds (from, to).
    #[serde(default = "default_slider_range")]
    pub slider_range: (f32, f32),
}

fn default_window_size() -> (f32, f32) {
    (1000.0, 800.0)
}

fn default_log_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_timer_period_ms() -> u64 {
    DEFAULT_PERIOD_MS
}

fn default_dark_mode() -> bool {
    true
}

fn default_combobox_options() -> Vec<String> {
    vec![
        "Вариант 1".to_string(),
        "Вариант 2".to_string(),
        "Вариант 3".to_string(),
    ]
}

fn default_slider_range() -> (f32, f32) {
    (0.0, 100.0)
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            log_capacity: default_log_capacity(),
            timer_period_ms: default_timer_period_ms(),
            dark_mode: default_dark_mode(),
            combobox_options: default_combobox_options(),
            slider_range: default_slider_range(),
        }
    }
}

impl AppSettings {
    /// Get the settings file path in the user's config directory.
    fn get_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push(APP_DIR_NAME);
            path.push(SETTINGS_FILENAME);
            path
        })
    }

    /// Load settings from disk, returning defaults if loading fails.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::info!(error = %e.brief_description(), "using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from disk, reporting why loading failed.
    pub fn try_load() -> Result<Self, AppError> {
        let path = Self::get_settings_path().ok_or(AppError::ConfigDirUnavailable)?;
        let content =
            std::fs::read_to_string(&path).map_err(|e| error::load_io_error(path.clone(), e))?;
        let settings = Self::from_json(&content).map_err(|e| AppError::SettingsLoadError {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Parse settings from JSON text. Missing fields take their defaults.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::get_settings_path().ok_or(AppError::ConfigDirUnavailable)?;

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| error::save_error(path.clone(), e))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| error::save_error(path.clone(), e))?;

        std::fs::write(&path, content).map_err(|e| error::save_error(path.clone(), e))?;

        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Log capacity, at least one line.
    pub fn get_log_capacity(&self) -> usize {
        self.log_capacity.max(1)
    }

    /// Timer period, clamped between the minimum and one day.
    pub fn get_timer_period(&self) -> std::time::Duration {
        let ms = self.timer_period_ms.clamp(MIN_PERIOD_MS, MAX_PERIOD_MS);
        std::time::Duration::from_millis(ms)
    }

    /// Slider bounds ordered low to high, defaults if either is not finite.
    pub fn get_slider_range(&self) -> (f32, f32) {
        let (a, b) = self.slider_range;
        if !a.is_finite() || !b.is_finite() {
            return default_slider_range();
        }
        (a.min(b), a.max(b))
    }

    /// Combobox entries, defaults if the list is empty.
    pub fn get_combobox_options(&self) -> Vec<String> {
        if self.combobox_options.is_empty() {
            default_combobox_options()
        } else {
            self.combobox_options.clone()
        }
    }

    /// Get the config file path for display purposes.
    pub fn get_config_path() -> Option<PathBuf> {
        Self::get_settings_path()
    }
}
