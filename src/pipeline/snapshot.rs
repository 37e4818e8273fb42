// src/pipeline/snapshot.rs

//! Cached normalization pass: fetch, normalize, write snapshots.

use std::time::Duration;

use crate::error::Result;
use crate::models::{Config, MediaKind, RunSummary};
use crate::pipeline::{Throttle, process_id};
use crate::services::MediaFetcher;
use crate::storage::SnapshotStorage;
use crate::utils::read_id_file;

/// Fetch and normalize every identifier of the given kinds, replacing each
/// kind's snapshot document with the records that survived.
pub async fn run_snapshot(
    config: &Config,
    fetcher: &dyn MediaFetcher,
    storage: &dyn SnapshotStorage,
    kinds: &[MediaKind],
    summary: &mut RunSummary,
) -> Result<()> {
    let mut throttle = Throttle::new(Duration::from_millis(config.catalog.request_delay_ms));

    for &kind in kinds {
        let ids = read_id_file(&config.paths.ids_dir.join(kind.id_file()))?;
        let total = ids.len();
        log::info!("[{}] Processing {} identifiers...", kind.label(), total);

        let mut records = Vec::new();
        for (index, id) in ids.into_iter().enumerate() {
            match process_id(fetcher, kind, id, &mut throttle).await {
                Ok(record) => {
                    log::info!(
                        "({}/{}) [{}] {} added successfully!",
                        index + 1,
                        total,
                        kind.label(),
                        record.title()
                    );
                    records.push(record);
                    summary.record_success();
                }
                Err(error) => {
                    log::error!(
                        "Error fetching or processing {} id {}: {}",
                        kind,
                        id,
                        error
                    );
                    summary.record_failure(id);
                }
            }
        }

        let info = storage.write_snapshot(kind, &records).await?;
        log::info!(
            "[{}] Snapshot written: {} records at {}",
            kind.label(),
            info.record_count,
            info.location
        );
    }

    Ok(())
}
