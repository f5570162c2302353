//! Core error types for the Finmate client.

use thiserror::Error;

use crate::constants::IMAGE_ENCODING_FAILED_MESSAGE;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client core.
///
/// Image validation results are values, see [`crate::utils::ImageValidation`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    /// Reading or encoding an image failed. The message is user-safe; the
    /// underlying cause is only logged.
    #[error("{0}")]
    ImageEncoding(String),
}

impl Error {
    /// The generic, user-facing image encoding failure.
    pub fn image_encoding() -> Self {
        Self::ImageEncoding(IMAGE_ENCODING_FAILED_MESSAGE.to_string())
    }
}
