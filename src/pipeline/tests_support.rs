//! Test doubles for the pipeline entry points.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use crate::error::{AppError, Result};
use crate::models::{MediaKind, MediaRecord, RawEpisode, RawMedia};
use crate::services::{MediaFetcher, MediaSubmitter, Outcome};
use crate::storage::{SnapshotInfo, SnapshotStorage};

/// Write an identifier list file into a temp directory.
pub fn write_id_file(dir: &TempDir, name: &str, ids: &[u32]) {
    let content = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(dir.path().join(name), content).unwrap();
}

/// Catalog double serving canned records and failures from memory.
#[derive(Default)]
pub struct FakeFetcher {
    records: HashMap<u32, RawMedia>,
    episodes: HashMap<u32, Vec<RawEpisode>>,
    failing: Vec<u32>,
    pub fetch_calls: Mutex<Vec<u32>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, id: u32, raw: RawMedia) -> Self {
        self.records.insert(id, raw);
        self
    }

    pub fn with_episodes(mut self, id: u32, episodes: Vec<RawEpisode>) -> Self {
        self.episodes.insert(id, episodes);
        self
    }

    pub fn with_error(mut self, id: u32) -> Self {
        self.failing.push(id);
        self
    }
}

#[async_trait]
impl MediaFetcher for FakeFetcher {
    async fn fetch(&self, kind: MediaKind, id: u32) -> Result<RawMedia> {
        self.fetch_calls.lock().unwrap().push(id);
        if self.failing.contains(&id) {
            return Err(AppError::Fetch {
                kind,
                id,
                status: 503,
            });
        }
        self.records
            .get(&id)
            .cloned()
            .ok_or(AppError::Fetch {
                kind,
                id,
                status: 404,
            })
    }

    async fn fetch_episodes(&self, id: u32) -> Result<Vec<RawEpisode>> {
        Ok(self.episodes.get(&id).cloned().unwrap_or_default())
    }
}

/// Backend double answering every submission with a fixed outcome.
pub struct FakeSubmitter {
    outcome: Outcome,
    pub submissions: Mutex<Vec<(MediaKind, serde_json::Value)>>,
}

impl FakeSubmitter {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaSubmitter for FakeSubmitter {
    async fn submit(&self, kind: MediaKind, record: &serde_json::Value) -> Outcome {
        self.submissions
            .lock()
            .unwrap()
            .push((kind, record.clone()));
        self.outcome.clone()
    }
}

/// In-memory snapshot store.
#[derive(Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<MediaKind, Vec<serde_json::Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(&self, kind: MediaKind, payloads: Vec<serde_json::Value>) {
        self.documents.lock().unwrap().insert(kind, payloads);
    }

    pub fn written(&self, kind: MediaKind) -> Vec<serde_json::Value> {
        self.documents
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl SnapshotStorage for MemoryStorage {
    async fn write_snapshot(
        &self,
        kind: MediaKind,
        records: &[MediaRecord],
    ) -> Result<SnapshotInfo> {
        let payloads = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let count = payloads.len();
        self.documents.lock().unwrap().insert(kind, payloads);
        Ok(SnapshotInfo {
            record_count: count,
            location: format!("memory://{}", kind.snapshot_name()),
        })
    }

    async fn read_snapshot(&self, kind: MediaKind) -> Result<Vec<serde_json::Value>> {
        Ok(self.written(kind))
    }
}
