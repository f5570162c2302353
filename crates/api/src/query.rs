//! Pagination query parameters.

use serde::Serialize;

use crate::error::{ApiError, Result};

/// Optional `page`/`limit` parameters. Absent values are left out of the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Encoded query without the leading `?`; empty when nothing is set.
    pub fn to_query(&self) -> Result<String> {
        serde_urlencoded::to_string(self)
            .map_err(|e| ApiError::Decode(format!("Failed to encode query: {}", e)))
    }
}

/// Appends `?query` to `path` unless the query is empty.
pub(crate) fn with_query(path: &str, params: &PageParams) -> Result<String> {
    let query = params.to_query()?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_omitted_when_absent() {
        let params = PageParams::page(2);
        assert_eq!(params.to_query().unwrap(), "page=2");
        assert_eq!(with_query("/payments", &params).unwrap(), "/payments?page=2");
    }

    #[test]
    fn test_limit_included_verbatim() {
        let params = PageParams::page(1).with_limit(5);
        assert_eq!(params.to_query().unwrap(), "page=1&limit=5");
    }

    #[test]
    fn test_empty_params_give_bare_path() {
        let params = PageParams::default();
        assert_eq!(params.to_query().unwrap(), "");
        assert_eq!(with_query("/payment-goals", &params).unwrap(), "/payment-goals");
    }
}
