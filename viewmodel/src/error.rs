use std::path::PathBuf;

use thiserror::Error;

/// Error reported by the playback backend
#[derive(Error, Debug)]
pub enum EngineError {
    /// The backend is not ready to accept commands (e.g. still starting up)
    #[error("playback engine unavailable")]
    Unavailable,

    #[error("playback engine rejected {command}: {reason}")]
    Rejected { command: &'static str, reason: String },

    /// NaN or infinite input, refused before it reaches the backend
    #[error("{command} needs a finite value, got {value}")]
    NotFinite { command: &'static str, value: f64 },

    #[error("playback backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub(crate) fn finite(command: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NotFinite { command, value })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
