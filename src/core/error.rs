//! Application error types for user-facing error handling.
//!
//! Only settings persistence can fail; everything else in the core is total.
//! These errors are shown in the status line and written to the diagnostic log.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level errors that can be displayed to users.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// The platform has no per-user config directory
    #[error("Config directory unavailable")]
    ConfigDirUnavailable,

    /// Settings could not be loaded
    #[error("Settings load error")]
    SettingsLoadError {
        /// Settings file that failed to load
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Settings could not be saved
    #[error("Settings save error")]
    SettingsSaveError {
        /// Settings file that failed to save
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },
}

impl AppError {
    /// Get the settings file path associated with this error, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        match self {
            Self::ConfigDirUnavailable => None,
            Self::SettingsLoadError { path, .. } | Self::SettingsSaveError { path, .. } => {
                Some(path)
            }
        }
    }

    /// Get the title for the error dialog.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::ConfigDirUnavailable => "Settings Unavailable",
            Self::SettingsLoadError { .. } | Self::SettingsSaveError { .. } => "Settings Error",
        }
    }

    /// Get a brief description of the error suitable for display.
    pub fn brief_description(&self) -> String {
        match self {
            Self::ConfigDirUnavailable => {
                "Could not determine the user configuration directory.".to_string()
            }
            Self::SettingsLoadError { reason, .. } => {
                format!("Could not load settings: {}", reason)
            }
            Self::SettingsSaveError { reason, .. } => {
                format!("Could not save settings: {}", reason)
            }
        }
    }
}

/// Create a load error from a settings path and I/O error.
pub fn load_io_error(path: PathBuf, error: std::io::Error) -> AppError {
    let reason = match error.kind() {
        std::io::ErrorKind::NotFound => "File not found".to_string(),
        std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => error.to_string(),
    };
    AppError::SettingsLoadError { path, reason }
}

/// Create a save error from a settings path and any displayable cause.
pub fn save_error(path: PathBuf, error: impl std::fmt::Display) -> AppError {
    AppError::SettingsSaveError {
        path,
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_unavailable() {
        let error = AppError::ConfigDirUnavailable;
        assert!(error.file_path().is_none());
        assert_eq!(error.dialog_title(), "Settings Unavailable");
        assert_eq!(error.to_string(), "Config directory unavailable");
    }

    #[test]
    fn test_load_io_error_not_found() {
        let path = PathBuf::from("/test/config.json");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = load_io_error(path.clone(), io_error);

        match &error {
            AppError::SettingsLoadError { path: p, reason } => {
                assert_eq!(p, &path);
                assert_eq!(reason, "File not found");
            }
            _ => panic!("Expected SettingsLoadError"),
        }
        assert_eq!(error.file_path(), Some(&path));
    }

    #[test]
    fn test_load_io_error_permission_denied() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = load_io_error(PathBuf::from("/test/config.json"), io_error);
        assert!(error.brief_description().contains("Permission denied"));
    }

    #[test]
    fn test_save_error_description() {
        let error = save_error(PathBuf::from("/test/config.json"), "disk full");
        assert_eq!(error.dialog_title(), "Settings Error");
        assert_eq!(
            error.brief_description(),
            "Could not save settings: disk full"
        );
    }
}
