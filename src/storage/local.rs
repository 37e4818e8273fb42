//! Local filesystem snapshot storage.
//!
//! One pretty-printed JSON array per media kind under the cache directory.
//! Writes go through a temp file and rename; the previous snapshot is only
//! at risk if the rename itself fails.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::{MediaKind, MediaRecord};
use crate::storage::{SnapshotInfo, SnapshotStorage};

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    cache_dir: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage rooted at the given cache directory.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Document path for a media kind.
    pub fn snapshot_path(&self, kind: MediaKind) -> PathBuf {
        self.cache_dir.join(format!("{}.json", kind.snapshot_name()))
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &PathBuf, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    async fn write_json<T: Serialize + ?Sized>(&self, path: &PathBuf, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(path, &bytes).await
    }

    /// Read JSON, returning None if the document doesn't exist.
    async fn read_json<T: DeserializeOwned>(&self, path: &PathBuf) -> Result<Option<T>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[async_trait]
impl SnapshotStorage for LocalStorage {
    async fn write_snapshot(
        &self,
        kind: MediaKind,
        records: &[MediaRecord],
    ) -> Result<SnapshotInfo> {
        let path = self.snapshot_path(kind);
        self.write_json(&path, records).await?;
        log::info!("Payload saved to {}", path.display());
        Ok(SnapshotInfo {
            record_count: records.len(),
            location: path.display().to_string(),
        })
    }

    async fn read_snapshot(&self, kind: MediaKind) -> Result<Vec<serde_json::Value>> {
        let path = self.snapshot_path(kind);
        match self.read_json(&path).await? {
            Some(records) => Ok(records),
            None => {
                log::warn!("No snapshot found at {}", path.display());
                Ok(Vec::new())
            }
        }
    }
}
