//! HTTP implementation of the items backend.
//!
//! Each request is a `POST` with no body to
//! `<base>/integrations/<endpoint>/get_<endpoint>_items`, carrying the
//! credentials and optional scope as query parameters.

use crate::backend::{ItemsBackend, ItemsRequest};
use crate::error::{ClientError, FetchError, extract_detail};
use crate::record::{Record, first_duplicate_id};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL used when the host does not configure one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for the HTTP backend.
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Backend base URL, without the `/integrations` suffix.
    pub base_url: String,
    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl HttpBackendConfig {
    /// Creates a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Sets a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Items backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpItemsBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpItemsBackend {
    /// Creates a backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot
    /// be built.
    pub fn new(config: HttpBackendConfig) -> data_form_core::Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::MissingBaseUrl.into());
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ClientError::BuildFailed {
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL for a request.
    #[must_use]
    pub fn url_for(&self, request: &ItemsRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

#[async_trait]
impl ItemsBackend for HttpItemsBackend {
    async fn fetch_items(&self, request: &ItemsRequest) -> Result<Vec<Record>, FetchError> {
        let url = self.url_for(request);

        debug!(
            integration = %request.integration,
            scope = ?request.scope.map(|s| s.query_value()),
            url = %url,
            "Requesting integration items"
        );

        let response = self
            .client
            .post(&url)
            .query(&request.query())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, url = %url, "Items request failed");
                FetchError::Transport {
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, url = %url, "Failed to read error response body");
                    String::new()
                }
            };
            let detail = extract_detail(&body);
            warn!(
                status = %status,
                detail = ?detail,
                url = %url,
                "Items request rejected by backend"
            );
            return Err(FetchError::Backend {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            reason: e.to_string(),
        })?;

        let records: Vec<Record> =
            serde_json::from_slice(&body).map_err(|e| FetchError::MalformedResponse {
                reason: e.to_string(),
            })?;

        if let Some(id) = first_duplicate_id(&records) {
            return Err(FetchError::MalformedResponse {
                reason: format!("duplicate record id '{id}'"),
            });
        }

        debug!(record_count = records.len(), url = %url, "Received integration items");
        Ok(records)
    }
}
