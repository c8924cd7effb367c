//! Application error types

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Recoverable Errors (logged, state left unchanged) =====
    #[error("File system error: {0}")]
    Fs(#[from] app_fs::FsError),

    #[error("Command {command} requires a {parameter} parameter")]
    MissingParameter {
        command: String,
        parameter: &'static str,
    },

    // ===== Fatal Errors (startup aborts) =====
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Fs(_) | AppError::MissingParameter { .. })
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Fs(app_fs::FsError::NotFound(path)) => format!("Not found: {}", path),
            AppError::Fs(app_fs::FsError::AccessDenied(path)) => format!("Access denied: {}", path),
            _ => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let err = AppError::from(app_fs::FsError::NotFound("/x".into()));
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "Not found: /x");

        let missing = AppError::MissingParameter {
            command: "nav.select_entry".into(),
            parameter: "path",
        };
        assert!(missing.is_recoverable());
        assert_eq!(
            missing.user_message(),
            "Command nav.select_entry requires a path parameter"
        );

        let config = AppError::from(toml::from_str::<toml::Value>("= broken").unwrap_err());
        assert!(!config.is_recoverable());
        assert!(config.user_message().starts_with("Configuration error"));
    }
}
