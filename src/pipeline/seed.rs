// src/pipeline/seed.rs

//! Detached load pass: read cached snapshots, submit to the backend.

use crate::error::Result;
use crate::models::{MediaKind, RunSummary};
use crate::pipeline::account;
use crate::services::MediaSubmitter;
use crate::storage::SnapshotStorage;

/// Submit every cached record of the given kinds to the backend. No
/// catalog calls happen here, so no throttling either.
pub async fn run_seed(
    submitter: &dyn MediaSubmitter,
    storage: &dyn SnapshotStorage,
    kinds: &[MediaKind],
    summary: &mut RunSummary,
) -> Result<()> {
    for &kind in kinds {
        let payloads = storage.read_snapshot(kind).await?;
        let total = payloads.len();
        log::info!("[{}] Seeding {} cached records...", kind.label(), total);

        for (index, payload) in payloads.iter().enumerate() {
            let id = payload
                .get("malId")
                .and_then(|v| v.as_u64())
                .unwrap_or_default() as u32;
            let title = payload
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("<untitled>");

            log::info!("({}/{}) [{}] {}...", index + 1, total, kind.label(), title);
            let outcome = submitter.submit(kind, payload).await;
            account(summary, kind, id, title, &outcome);
        }
    }

    Ok(())
}
