//! Error types for the cq-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the engine and file-format errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Attempt #{index} could not be checked: {source}")]
    Attempt {
        index: usize,
        source: cq_quiz::QuizError,
    },

    #[error(transparent)]
    Quiz(#[from] cq_quiz::QuizError),

    #[error(transparent)]
    Conversion(#[from] cq_units::ConversionError),

    #[error(transparent)]
    Core(#[from] cq_core::CoreError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for cq-app operations.
pub type AppResult<T> = Result<T, AppError>;
