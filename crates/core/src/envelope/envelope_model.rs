//! The `{success, data, message?, errors?}` response envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation errors attached to an envelope.
///
/// The server sends either a field-keyed map or a flat list of messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiErrors {
    Fields(BTreeMap<String, Vec<String>>),
    List(Vec<String>),
}

impl ApiErrors {
    /// All messages, field-keyed ones in field order.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiErrors::Fields(fields) => fields.values().flatten().cloned().collect(),
            ApiErrors::List(list) => list.clone(),
        }
    }

    /// Messages for one field. Always empty for the flat-list shape.
    pub fn for_field(&self, field: &str) -> &[String] {
        match self {
            ApiErrors::Fields(fields) => fields.get(field).map(Vec::as_slice).unwrap_or(&[]),
            ApiErrors::List(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ApiErrors::Fields(fields) => fields.values().all(Vec::is_empty),
            ApiErrors::List(list) => list.is_empty(),
        }
    }
}

/// Generic response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ApiErrors>,
}

/// An application-level failure carried by an envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeFailure {
    pub message: Option<String>,
    pub errors: Option<ApiErrors>,
}

impl EnvelopeFailure {
    /// Best single line to show the user.
    pub fn summary(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        self.errors
            .as_ref()
            .and_then(|e| e.messages().into_iter().next())
            .unwrap_or_else(|| "Terjadi kesalahan".to_string())
    }
}

impl<T> ApiResponse<T> {
    /// Splits the envelope into its data or its failure.
    ///
    /// `success: true` without `data` is a failure: there is nothing to show.
    pub fn into_result(self) -> Result<T, EnvelopeFailure> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(EnvelopeFailure {
                message: self.message,
                errors: self.errors,
            }),
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.as_ref().map(ApiErrors::messages).unwrap_or_default()
    }
}
