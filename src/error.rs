use thiserror::Error;

/// Errors that can occur while loading [`crate::config::Settings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Errors surfaced by the binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("Failed to launch window: {0}")]
    Launch(#[from] eframe::Error),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
