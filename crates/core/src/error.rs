use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipguardError {
    #[error("Analysis service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Analysis service reported an error: {message}")]
    Service { message: String },

    #[error("Failed to read video {path}: {source}")]
    VideoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClipguardError>;

/// Reasons a drop is refused before any request is built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("an analysis is already in progress")]
    Busy,

    #[error("missing API key")]
    MissingApiKey,

    #[error("no analysis option selected")]
    NoOptionSelected,

    #[error("no supported video file was provided")]
    NoVideoFile,
}
