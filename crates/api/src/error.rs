//! Error types for the API crate.

use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the Finmate API.
///
/// Application-level failures (`success: false` in an envelope) and local
/// image validation failures are not errors; they are returned as values.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection could not be established or was aborted
    #[error("Network error: {0}")]
    Http(#[source] reqwest::Error),

    /// The configured request timeout elapsed
    #[error("Request timed out")]
    Timeout,

    /// The server rejected the request (raising endpoints only)
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Missing or malformed access token
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// The image could not be read for upload
    #[error("{0}")]
    Image(#[from] finmate_core::Error),

    /// The HTTP client could not be built
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a status error with the generic message.
    pub fn status(status: u16) -> Self {
        Self::Status {
            status,
            message: "Gagal memuat data".to_string(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Http(error)
        }
    }
}
