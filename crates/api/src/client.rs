//! Shared HTTP client for the Finmate API.
//!
//! Builds authenticated requests and turns responses into one of the two
//! result shapes the endpoints use: a strict body that errors on non-2xx, or an
//! envelope that is returned whatever the status.

use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use finmate_core::{ApiResponse, AppConfig};

use crate::error::{ApiError, Result};

/// HTTP client bound to one API base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from the resolved configuration.
    ///
    /// The configured timeout applies to every request made with this client.
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_base_url(&config.api_base_url, config.request_timeout())
    }

    /// Create a client for an explicit base URL and timeout.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client, carrying the configured timeout.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Create headers for an API request.
    pub fn headers(token: &str) -> Result<HeaderMap> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ApiError::auth("Missing access token"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::auth("Invalid access token format"))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    /// GET a body that must come with a 2xx status.
    pub(crate) async fn get_strict<T: DeserializeOwned>(
        &self,
        token: &str,
        path_and_query: &str,
    ) -> Result<T> {
        let headers = Self::headers(token)?;
        let url = self.url(path_and_query);
        debug!("GET {}", url);

        let response = self.client.get(&url).headers(headers).send().await?;
        Self::parse_strict(response).await
    }

    /// GET an envelope, returned regardless of the HTTP status.
    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        token: &str,
        path_and_query: &str,
    ) -> Result<ApiResponse<T>> {
        let headers = Self::headers(token)?;
        let url = self.url(path_and_query);
        debug!("GET {}", url);

        let response = self.client.get(&url).headers(headers).send().await?;
        Self::parse_envelope(response).await
    }

    /// POST a JSON body and return the envelope regardless of the HTTP status.
    pub(crate) async fn post_envelope<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let headers = Self::headers(token)?;
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;
        Self::parse_envelope(response).await
    }

    async fn parse_strict<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        if !status.is_success() {
            return Err(ApiError::status(status.as_u16()));
        }

        Self::decode(status, &body)
    }

    async fn parse_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status();
        let body = response.text().await?;
        debug!("API response ({}): {}", status, body);

        Self::decode(status, &body)
    }

    fn decode<T: DeserializeOwned>(status: reqwest::StatusCode, body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(|e| {
            error!(
                "Failed to deserialize response ({}). Body: {}, Error: {}",
                status, body, e
            );
            ApiError::Decode(e.to_string())
        })
    }
}
