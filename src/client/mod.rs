//! HTTP client for the document store gateway.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles
//! authentication, partition-key routing, and error mapping for the gateway's
//! REST surface.

mod async_wrapper;
pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::metrics::Metrics;
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Confirmation returned by the gateway for a successful write.
///
/// Carries the document as persisted together with the metadata headers the
/// gateway attaches to its response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemResponse {
    /// The stored document, including the server-assigned identifier
    pub document: Contact,

    /// Entity tag of the stored document, if the gateway returned one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Request charge consumed by the write, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_charge: Option<f64>,
}

/// HTTP client for the document store gateway.
///
/// The database and container names are resolved once at construction and
/// held for the client's lifetime. The client is cheap to clone and safe to
/// share across request handlers.
#[derive(Clone)]
pub struct StoreClient {
    /// Gateway base URL
    endpoint: String,

    /// API key for authentication
    api_key: String,

    /// Database the contact container lives in
    database: String,

    /// Container documents are written to
    container: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            endpoint: config.store_endpoint.clone(),
            api_key: config.store_api_key.clone(),
            database: config.database_name.clone(),
            container: config.container_name.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a StoreClient with a custom endpoint (useful for testing).
    #[doc(hidden)]
    pub fn with_endpoint(
        endpoint: String,
        api_key: String,
        database: String,
        container: String,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            endpoint,
            api_key,
            database,
            container,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Collection path documents are created under.
    fn docs_path(&self) -> String {
        format!("/dbs/{}/colls/{}/docs", self.database, self.container)
    }

    /// Execute a POST request with authentication, partition key, and JSON body.
    fn post(
        &self,
        path: &str,
        partition_key: &str,
        body: &serde_json::Value,
    ) -> Result<ureq::Response, StoreError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("x-store-api-key", &self.api_key)
            .set("x-partition-key", partition_key)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Map a ureq error to a StoreError.
    fn map_error(&self, error: ureq::Error) -> StoreError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    400 => StoreError::InvalidRequest(message),
                    401 => StoreError::Unauthorized,
                    404 => StoreError::NotFound(message),
                    409 => StoreError::Conflict(message),
                    429 => StoreError::RateLimitExceeded,
                    _ => StoreError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreError::Timeout
                } else {
                    StoreError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Create a new document in the contact container.
    ///
    /// The record's `contact_type` routes the write: it travels as the
    /// partition-key header and determines physical placement in the store.
    /// A record without one cannot be placed, so the client refuses to issue
    /// the request rather than relying on the gateway's rejection.
    pub fn create_document(&self, contact: &Contact) -> StoreResult<ItemResponse> {
        let partition_key = contact.partition_key();
        if partition_key.is_empty() {
            return Err(StoreError::InvalidRequest(
                "partition key must not be empty".to_string(),
            ));
        }

        let body = serde_json::to_value(contact).map_err(StoreError::JsonError)?;
        let response = self.post(&self.docs_path(), partition_key, &body)?;

        let etag = response.header("etag").map(str::to_string);
        let request_charge = response
            .header("x-request-charge")
            .and_then(|value| value.parse::<f64>().ok());

        let response_body = response
            .into_string()
            .map_err(|e| StoreError::HttpError(e.to_string()))?;

        let document: Contact =
            serde_json::from_str(&response_body).map_err(StoreError::JsonError)?;

        self.metrics.record_documents_created(1);
        Ok(ItemResponse {
            document,
            etag,
            request_charge,
        })
    }
}
