//! Error handling

use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

/// Failure of the scan request itself (not a verdict the server reported)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request never completed (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status without a usable result body
    #[error("Server error: {0}")]
    Status(u16),

    /// Body was not a scan result
    #[error("Parse error: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ViewError {
    /// Playback timers need a tokio runtime on the calling thread
    #[error("No async runtime available to schedule playback")]
    RuntimeUnavailable,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}
