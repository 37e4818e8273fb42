//! Normalization of raw catalog records into canonical payloads.
//!
//! One mapper per media kind, sharing the helpers in this module for
//! image selection, synonym joining, date-range formatting and the
//! decorative placeholder fields. Mapping is deterministic for the same
//! input except for [`Decorations`], which is drawn fresh per record.

mod anime;
mod lightnovel;
mod manga;

use rand::Rng;

use crate::error::{AppError, Result};
use crate::models::{
    ImageSet, MediaKind, MediaRecord, ProgressStatus, RawDateRange, RawEpisode, RawImages,
    RawMedia,
};

/// Normalize one raw record of the given kind. `episodes` is only
/// consulted for anime and may be empty otherwise.
pub fn normalize(kind: MediaKind, raw: &RawMedia, episodes: &[RawEpisode]) -> Result<MediaRecord> {
    match kind {
        MediaKind::Anime => Ok(MediaRecord::Anime(anime::normalize(raw, episodes)?)),
        MediaKind::Manga => Ok(MediaRecord::Manga(manga::normalize(raw)?)),
        MediaKind::LightNovel => Ok(MediaRecord::LightNovel(lightnovel::normalize(raw)?)),
    }
}

/// Unwrap a required field or fail naming its path.
pub(crate) fn require<T>(value: Option<T>, path: &str) -> Result<T> {
    value.ok_or_else(|| AppError::schema(path))
}

/// Pick the image triple, preferring the webp set over jpg. A record with
/// no usable set maps to a null triple, not an error.
pub(crate) fn select_images(images: Option<&RawImages>) -> ImageSet {
    let set = images.and_then(|i| i.webp.as_ref().or(i.jpg.as_ref()));
    match set {
        Some(set) => ImageSet {
            image_url: set.image_url.clone(),
            large_image_url: set.large_image_url.clone(),
            small_image_url: set.small_image_url.clone(),
        },
        None => ImageSet::default(),
    }
}

/// Join title synonyms as a single lowercase, space-separated string.
pub(crate) fn join_synonyms(synonyms: &[String]) -> String {
    synonyms
        .iter()
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one catalog timestamp as a "Mon DD, YYYY" display date.
pub(crate) fn format_date(value: &str, path: &str) -> Result<String> {
    let parsed = chrono::DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z")
        .map_err(|_| AppError::schema(path))?;
    Ok(parsed.format("%b %d, %Y").to_string())
}

/// Format an airing/publication window as "<start> to <end>", with "?"
/// standing in for an open end. Only called when the window applies; the
/// start date is required at that point.
pub(crate) fn format_range(range: Option<&RawDateRange>, path: &str) -> Result<String> {
    let range = require(range, path)?;
    let from = require(range.from.as_deref(), &format!("{path}.from"))?;
    let start = format_date(from, &format!("{path}.from"))?;
    let end = match range.to.as_deref() {
        Some(to) => format_date(to, &format!("{path}.to"))?,
        None => "?".to_string(),
    };
    Ok(format!("{start} to {end}"))
}

/// Presentation filler attached to every normalized record. Drawn from an
/// unseeded RNG; repeated normalization of the same input differs here.
#[derive(Debug, Clone)]
pub(crate) struct Decorations {
    pub ratings: [u8; 5],
    pub consumed_at: String,
    pub progress_status: ProgressStatus,
}

impl Decorations {
    pub fn draw() -> Self {
        let mut rng = rand::thread_rng();
        let ratings = [
            rng.gen_range(1..=10),
            rng.gen_range(1..=10),
            rng.gen_range(1..=10),
            rng.gen_range(1..=10),
            rng.gen_range(1..=10),
        ];
        let year = rng.gen_range(2020..=2024);
        let month = rng.gen_range(1..=12);
        let consumed_at = format!("{year}-{month:02}-01T00:00:00.000Z");
        let progress_status = ProgressStatus::ALL[rng.gen_range(0..ProgressStatus::ALL.len())];
        Self {
            ratings,
            consumed_at,
            progress_status,
        }
    }
}
