//! Catalog API client.
//!
//! One lookup per identifier, plus the anime-only episode sub-resource.
//! The client does not retry and does not throttle; pacing is the
//! pipeline's responsibility.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::models::{CatalogConfig, Envelope, MediaKind, RawEpisode, RawMedia};
use crate::utils::http;

/// Port for catalog lookups so pipelines can run against a test double.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Fetch the raw record for one identifier.
    async fn fetch(&self, kind: MediaKind, id: u32) -> Result<RawMedia>;

    /// Fetch the episode list for one anime identifier.
    async fn fetch_episodes(&self, id: u32) -> Result<Vec<RawEpisode>>;
}

/// HTTP client for the external catalog API.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = http::create_client(&config.user_agent, config.timeout_secs)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        kind: MediaKind,
        id: u32,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::RateLimited { kind, id });
        }
        if !status.is_success() {
            return Err(AppError::Fetch {
                kind,
                id,
                status: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MediaFetcher for CatalogClient {
    async fn fetch(&self, kind: MediaKind, id: u32) -> Result<RawMedia> {
        let path = format!("{}/{}", kind.api_path(), id);
        let envelope: Envelope<RawMedia> = self.get_json(&path, kind, id).await?;
        Ok(envelope.data)
    }

    async fn fetch_episodes(&self, id: u32) -> Result<Vec<RawEpisode>> {
        let path = format!("anime/{}/episodes", id);
        let envelope: Envelope<Vec<RawEpisode>> =
            self.get_json(&path, MediaKind::Anime, id).await?;
        Ok(envelope.data)
    }
}
