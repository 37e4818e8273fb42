//! Pipeline entry points for seeding operations.
//!
//! - `run_snapshot`: fetch + normalize into the snapshot cache
//! - `run_seed`: load cached snapshots into the backend
//! - `run_direct`: fetch + normalize + submit without caching
//!
//! All three share the same fault isolation policy: any per-identifier
//! error is logged, recorded in the run summary, and the batch continues.
//! Only session-level preconditions (unreadable ID lists, snapshot storage
//! failures) abort a run.

mod direct;
mod seed;
mod snapshot;
#[cfg(test)]
pub(crate) mod tests_support;
mod throttle;

pub use direct::run_direct;
pub use seed::run_seed;
pub use snapshot::run_snapshot;
pub use throttle::Throttle;

use crate::error::Result;
use crate::models::{MediaKind, MediaRecord, RunSummary};
use crate::normalize;
use crate::services::{MediaFetcher, Outcome};

/// Fetch and normalize one identifier. Every catalog call goes through the
/// throttle gate, including the anime episode sub-fetch.
pub(crate) async fn process_id(
    fetcher: &dyn MediaFetcher,
    kind: MediaKind,
    id: u32,
    throttle: &mut Throttle,
) -> Result<MediaRecord> {
    throttle.wait().await;
    let raw = fetcher.fetch(kind, id).await?;

    let episodes = if kind == MediaKind::Anime {
        throttle.wait().await;
        fetcher.fetch_episodes(id).await?
    } else {
        Vec::new()
    };

    normalize::normalize(kind, &raw, &episodes)
}

/// Record one submission outcome into the summary. Exactly one identifier
/// is appended per non-created outcome; created outcomes append none.
pub(crate) fn account(
    summary: &mut RunSummary,
    kind: MediaKind,
    id: u32,
    title: &str,
    outcome: &Outcome,
) {
    match outcome {
        Outcome::Created => {
            log::info!("[{}] {} created successfully!", kind.label(), title);
            summary.record_success();
        }
        Outcome::Rejected(status) => {
            log::error!(
                "[{}] Failed to create {} (id {}): HTTP {}",
                kind.label(),
                title,
                id,
                status
            );
            summary.record_failure(id);
        }
        Outcome::TransportError(detail) => {
            log::error!(
                "[{}] Error while creating {} (id {}): {}",
                kind.label(),
                title,
                id,
                detail
            );
            summary.record_failure(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_created_only_increments_success() {
        let mut summary = RunSummary::new();
        account(
            &mut summary,
            MediaKind::Anime,
            1,
            "Cowboy Bebop",
            &Outcome::Created,
        );
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure, 0);
        assert!(summary.failed_ids.is_empty());
    }

    #[test]
    fn test_account_rejection_appends_one_id() {
        let mut summary = RunSummary::new();
        // Other 2xx codes are rejections too; success is 201 only.
        account(
            &mut summary,
            MediaKind::Manga,
            7,
            "Berserk",
            &Outcome::Rejected(200),
        );
        account(
            &mut summary,
            MediaKind::Manga,
            7,
            "Berserk",
            &Outcome::TransportError("connection reset".to_string()),
        );
        assert_eq!(summary.success, 0);
        assert_eq!(summary.failure, 2);
        assert_eq!(summary.failed_ids, vec![7, 7]);
    }
}
