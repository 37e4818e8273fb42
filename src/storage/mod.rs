//! Storage abstractions for snapshot persistence.
//!
//! A snapshot is one JSON array document per media kind holding the full
//! normalized batch. Writes are full-batch replaces, never appends.
//!
//! ## Directory Structure
//!
//! ```text
//! media_cache/
//! ├── anime_payloads.json
//! ├── manga_payloads.json
//! └── lightnovel_payloads.json
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{MediaKind, MediaRecord};

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a snapshot write.
#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    /// Number of records written
    pub record_count: usize,
    /// Where the document landed
    pub location: String,
}

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Replace the kind's snapshot document with the given batch.
    async fn write_snapshot(
        &self,
        kind: MediaKind,
        records: &[MediaRecord],
    ) -> Result<SnapshotInfo>;

    /// Read the kind's snapshot back as raw JSON objects for a detached
    /// load pass. A missing document reads as an empty batch.
    async fn read_snapshot(&self, kind: MediaKind) -> Result<Vec<serde_json::Value>>;
}
