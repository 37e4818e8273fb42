// src/error.rs

//! Unified error handling for the seeding pipeline.

use thiserror::Error;

use crate::models::MediaKind;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog API returned a non-success status
    #[error("Catalog fetch failed for {kind} id {id}: HTTP {status}")]
    Fetch {
        kind: MediaKind,
        id: u32,
        status: u16,
    },

    /// Catalog API rejected the request for going over its rate limit
    #[error("Catalog rate limit hit for {kind} id {id}")]
    RateLimited { kind: MediaKind, id: u32 },

    /// Required field missing from an otherwise-successful fetch
    #[error("Missing required field '{path}' in catalog record")]
    Schema { path: String },

    /// Identifier list file could not be parsed
    #[error("Invalid identifier in {path} at line {line}")]
    IdFile { path: String, line: usize },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a schema error naming the missing field path.
    pub fn schema(path: impl Into<String>) -> Self {
        Self::Schema { path: path.into() }
    }
}
