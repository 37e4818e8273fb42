//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// External catalog API settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Downstream content backend settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Input and cache locations
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.user_agent.trim().is_empty() {
            return Err(AppError::config("catalog.user_agent is empty"));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(AppError::config("catalog.timeout_secs must be > 0"));
        }
        if self.backend.timeout_secs == 0 {
            return Err(AppError::config("backend.timeout_secs must be > 0"));
        }
        Url::parse(&self.catalog.base_url)
            .map_err(|e| AppError::config(format!("catalog.base_url is invalid: {e}")))?;
        Url::parse(&self.backend.base_url)
            .map_err(|e| AppError::config(format!("backend.base_url is invalid: {e}")))?;
        Ok(())
    }
}

/// External catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    #[serde(default = "defaults::catalog_base_url")]
    pub base_url: String,

    /// User-Agent header for catalog requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Minimum delay between consecutive catalog requests in milliseconds.
    /// The catalog enforces an undocumented rate limit; lower at your own risk.
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::catalog_base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Downstream content backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend load API
    #[serde(default = "defaults::backend_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::backend_base_url(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Input and cache locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the per-kind identifier list files
    #[serde(default = "defaults::ids_dir")]
    pub ids_dir: PathBuf,

    /// Directory holding the per-kind snapshot documents
    #[serde(default = "defaults::cache_dir")]
    pub cache_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            ids_dir: defaults::ids_dir(),
            cache_dir: defaults::cache_dir(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn catalog_base_url() -> String {
        "https://api.jikan.moe/v4".to_string()
    }

    pub fn backend_base_url() -> String {
        "http://localhost:3000".to_string()
    }

    pub fn user_agent() -> String {
        format!("mediaseed/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn request_delay() -> u64 {
        3000
    }

    pub fn ids_dir() -> PathBuf {
        PathBuf::from(".")
    }

    pub fn cache_dir() -> PathBuf {
        PathBuf::from("media_cache")
    }
}
