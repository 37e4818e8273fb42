//! Backend load API client.
//!
//! Submits one canonical record per call as JSON. The backend signals
//! creation with HTTP 201 and nothing else; every other status is a
//! rejection carrying the status code. Never retries.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{BackendConfig, MediaKind};
use crate::utils::http;

/// Result of one record submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Backend returned 201
    Created,
    /// Backend returned any other status
    Rejected(u16),
    /// Request never produced a status
    TransportError(String),
}

impl Outcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created)
    }
}

/// Port for record submission so pipelines can run against a test double.
#[async_trait]
pub trait MediaSubmitter: Send + Sync {
    /// Submit one canonical record to the kind's endpoint.
    async fn submit(&self, kind: MediaKind, record: &serde_json::Value) -> Outcome;
}

/// HTTP client for the downstream content backend.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client from configuration.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let user_agent = format!("mediaseed/{}", env!("CARGO_PKG_VERSION"));
        let client = http::create_client(&user_agent, config.timeout_secs)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, kind: MediaKind) -> String {
        format!("{}/api/{}", self.base_url, kind.endpoint())
    }
}

#[async_trait]
impl MediaSubmitter for BackendClient {
    async fn submit(&self, kind: MediaKind, record: &serde_json::Value) -> Outcome {
        let url = self.endpoint_url(kind);
        log::debug!("POST {url}");

        match self.client.post(&url).json(record).send().await {
            Ok(response) if response.status() == reqwest::StatusCode::CREATED => Outcome::Created,
            Ok(response) => Outcome::Rejected(response.status().as_u16()),
            Err(e) => Outcome::TransportError(e.to_string()),
        }
    }
}
