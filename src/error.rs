//! Error types shared across the application.

use thiserror::Error;

/// Errors raised by storage, persistence and playback.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine a user data directory")]
    DataDir,

    #[error("playback failed: {0}")]
    Playback(String),
}

pub type AppResult<T> = Result<T, AppError>;
