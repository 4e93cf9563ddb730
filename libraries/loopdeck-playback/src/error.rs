//! Error types for playlist and playback management

use loopdeck_core::StorageError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// A store operation failed; the in-memory change is kept
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The external media resource rejected a request
    #[error("Media error: {0}")]
    Media(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlaybackError {
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }
}

impl From<config::ConfigError> for PlaybackError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
