//! Image upload validation and data URL encoding.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ALLOWED_IMAGE_TYPES, DEFAULT_IMAGE_MIME, IMAGE_TOO_LARGE_MESSAGE,
    IMAGE_TYPE_NOT_ALLOWED_MESSAGE, MAX_IMAGE_BYTES,
};
use crate::errors::{Error, Result};

/// An image picked by the user.
///
/// `file_size` and `mime_type` are optional; when absent the corresponding
/// check is skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageAsset {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageAsset {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }
}

/// Why an image was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRejection {
    #[error("{}", IMAGE_TOO_LARGE_MESSAGE)]
    TooLarge { size: u64 },
    #[error("{}", IMAGE_TYPE_NOT_ALLOWED_MESSAGE)]
    TypeNotAllowed { mime_type: String },
}

/// Result of [`validate_image_asset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageValidation {
    pub is_valid: bool,
    pub error: Option<ImageRejection>,
}

impl ImageValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn rejected(reason: ImageRejection) -> Self {
        Self {
            is_valid: false,
            error: Some(reason),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Checks size (at most 2 MiB) and MIME type against the allow-list.
pub fn validate_image_asset(asset: &ImageAsset) -> ImageValidation {
    if let Some(size) = asset.file_size {
        if size > MAX_IMAGE_BYTES {
            return ImageValidation::rejected(ImageRejection::TooLarge { size });
        }
    }

    if let Some(mime_type) = asset.mime_type.as_deref() {
        let normalized = mime_type.trim().to_ascii_lowercase();
        if !ALLOWED_IMAGE_TYPES.contains(&normalized.as_str()) {
            return ImageValidation::rejected(ImageRejection::TypeNotAllowed {
                mime_type: mime_type.to_string(),
            });
        }
    }

    ImageValidation::valid()
}

/// Reads the image at `uri` and returns it as a `data:` URL.
///
/// `uri` may be a data URL (returned as is), an `http(s)` URL, a `file://`
/// URL or a filesystem path. Remote images are fetched with `client`, so its
/// timeout applies. Any read failure yields the generic
/// [`Error::ImageEncoding`]; the cause is only logged.
pub async fn encode_image_as_data_url(
    client: &reqwest::Client,
    uri: &str,
    mime_type: Option<&str>,
) -> Result<String> {
    if uri.starts_with("data:") {
        return Ok(uri.to_string());
    }

    let bytes = read_image_bytes(client, uri).await.map_err(|e| {
        warn!("Failed to read image at {}: {}", uri, e);
        Error::image_encoding()
    })?;

    if bytes.starts_with(b"data:") {
        if let Ok(text) = String::from_utf8(bytes.clone()) {
            return Ok(text);
        }
    }

    let mime = mime_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_IMAGE_MIME);
    debug!("Encoded {} bytes from {} as {}", bytes.len(), uri, mime);
    Ok(format!("data:{};base64,{}", mime, B64.encode(&bytes)))
}

async fn read_image_bytes(
    client: &reqwest::Client,
    uri: &str,
) -> std::result::Result<Vec<u8>, String> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        let response = client.get(uri).send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }
        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        return Ok(bytes.to_vec());
    }

    let path = PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri));
    tokio::fs::read(&path).await.map_err(|e| e.to_string())
}
