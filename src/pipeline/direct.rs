// src/pipeline/direct.rs

//! Direct pass: fetch, normalize and submit without touching the cache.

use std::time::Duration;

use crate::error::Result;
use crate::models::{Config, MediaKind, RunSummary};
use crate::pipeline::{Throttle, account, process_id};
use crate::services::{MediaFetcher, MediaSubmitter};
use crate::utils::read_id_file;

/// Fetch, normalize and submit every identifier of the given kinds.
pub async fn run_direct(
    config: &Config,
    fetcher: &dyn MediaFetcher,
    submitter: &dyn MediaSubmitter,
    kinds: &[MediaKind],
    summary: &mut RunSummary,
) -> Result<()> {
    let mut throttle = Throttle::new(Duration::from_millis(config.catalog.request_delay_ms));

    for &kind in kinds {
        let ids = read_id_file(&config.paths.ids_dir.join(kind.id_file()))?;
        let total = ids.len();
        log::info!("[{}] Processing {} identifiers...", kind.label(), total);

        for (index, id) in ids.into_iter().enumerate() {
            let record = match process_id(fetcher, kind, id, &mut throttle).await {
                Ok(record) => record,
                Err(error) => {
                    log::error!(
                        "Error fetching or processing {} id {}: {}",
                        kind,
                        id,
                        error
                    );
                    summary.record_failure(id);
                    continue;
                }
            };

            log::info!(
                "({}/{}) [{}] Processing {}...",
                index + 1,
                total,
                kind.label(),
                record.title()
            );

            let payload = match serde_json::to_value(&record) {
                Ok(payload) => payload,
                Err(error) => {
                    log::error!("Failed to encode {} id {}: {}", kind, id, error);
                    summary.record_failure(id);
                    continue;
                }
            };

            let outcome = submitter.submit(kind, &payload).await;
            account(summary, kind, id, record.title(), &outcome);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests_support::{FakeFetcher, FakeSubmitter, write_id_file};
    use crate::models::{RawDateRange, RawEpisode, RawImageSet, RawImages, RawMedia};
    use crate::services::Outcome;
    use tempfile::TempDir;

    fn config_with_ids(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.paths.ids_dir = dir.path().to_path_buf();
        config.catalog.request_delay_ms = 0;
        config
    }

    fn aired_tv_anime(id: u32) -> RawMedia {
        RawMedia {
            mal_id: Some(id),
            title: Some("Cowboy Bebop".to_string()),
            media_type: Some("TV".to_string()),
            status: Some("Finished Airing".to_string()),
            aired: Some(RawDateRange {
                from: Some("1998-04-03T00:00:00+00:00".to_string()),
                to: Some("1999-04-24T00:00:00+00:00".to_string()),
            }),
            images: Some(RawImages {
                jpg: Some(RawImageSet {
                    image_url: Some("jpg.jpg".to_string()),
                    large_image_url: Some("jpg_l.jpg".to_string()),
                    small_image_url: Some("jpg_s.jpg".to_string()),
                }),
                webp: Some(RawImageSet {
                    image_url: Some("webp.webp".to_string()),
                    large_image_url: Some("webp_l.webp".to_string()),
                    small_image_url: Some("webp_s.webp".to_string()),
                }),
            }),
            ..RawMedia::default()
        }
    }

    #[tokio::test]
    async fn test_fully_populated_anime_reaches_backend() {
        let dir = TempDir::new().unwrap();
        write_id_file(&dir, "anime_ids.txt", &[1]);
        let config = config_with_ids(&dir);

        let episodes = vec![
            RawEpisode {
                mal_id: Some(1),
                title: Some("Asteroid Blues".to_string()),
                aired: Some("1998-10-24T00:00:00+00:00".to_string()),
                ..RawEpisode::default()
            },
            RawEpisode {
                mal_id: Some(2),
                title: Some("Stray Dog Strut".to_string()),
                aired: None,
                ..RawEpisode::default()
            },
        ];
        let fetcher = FakeFetcher::new()
            .with_record(1, aired_tv_anime(1))
            .with_episodes(1, episodes);
        let submitter = FakeSubmitter::new(Outcome::Created);
        let mut summary = RunSummary::new();

        run_direct(
            &config,
            &fetcher,
            &submitter,
            &[MediaKind::Anime],
            &mut summary,
        )
        .await
        .unwrap();

        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure, 0);

        let submissions = submitter.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);
        let payload = &submissions[0].1;
        assert_eq!(payload["images"]["image_url"], "webp.webp");
        assert_eq!(payload["aired"], "Apr 03, 1998 to Apr 24, 1999");
        assert_eq!(payload["episodes"].as_array().unwrap().len(), 2);
        assert_eq!(payload["episodes"][1]["aired"], "N/A");
    }

    #[tokio::test]
    async fn test_transport_failure_never_reaches_backend() {
        let dir = TempDir::new().unwrap();
        write_id_file(&dir, "manga_ids.txt", &[2]);
        let config = config_with_ids(&dir);

        let fetcher = FakeFetcher::new().with_error(2);
        let submitter = FakeSubmitter::new(Outcome::Created);
        let mut summary = RunSummary::new();

        run_direct(
            &config,
            &fetcher,
            &submitter,
            &[MediaKind::Manga],
            &mut summary,
        )
        .await
        .unwrap();

        assert_eq!(summary.success, 0);
        assert_eq!(summary.failure, 1);
        assert_eq!(summary.failed_ids, vec![2]);
        assert_eq!(submitter.submission_count(), 0);
    }

    #[tokio::test]
    async fn test_kind_order_and_source_order_preserved() {
        let dir = TempDir::new().unwrap();
        write_id_file(&dir, "anime_ids.txt", &[10, 11]);
        write_id_file(&dir, "manga_ids.txt", &[20]);
        write_id_file(&dir, "lightnovel_ids.txt", &[30]);
        let config = config_with_ids(&dir);

        // None of the ids resolve; the fetch order is what matters here.
        let fetcher = FakeFetcher::new();
        let submitter = FakeSubmitter::new(Outcome::Created);
        let mut summary = RunSummary::new();

        run_direct(&config, &fetcher, &submitter, &MediaKind::ALL, &mut summary)
            .await
            .unwrap();

        assert_eq!(*fetcher.fetch_calls.lock().unwrap(), vec![10, 11, 20, 30]);
        assert_eq!(summary.failed_ids, vec![10, 11, 20, 30]);
    }
}
