//! Canonical media record structures.
//!
//! These are the backend-ready payloads produced by normalization. Field
//! names follow the backend's JSON contract: camelCase throughout, except
//! the image triple which keeps the catalog's snake_case keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The three media kinds handled by the pipeline, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Anime,
    Manga,
    LightNovel,
}

impl MediaKind {
    /// All kinds in the fixed processing order.
    pub const ALL: [MediaKind; 3] = [MediaKind::Anime, MediaKind::Manga, MediaKind::LightNovel];

    /// Path segment on the catalog API. Light novels live under the
    /// catalog's manga resource.
    pub fn api_path(&self) -> &'static str {
        match self {
            MediaKind::Anime => "anime",
            MediaKind::Manga | MediaKind::LightNovel => "manga",
        }
    }

    /// Path segment on the backend load API.
    pub fn endpoint(&self) -> &'static str {
        match self {
            MediaKind::Anime => "anime",
            MediaKind::Manga => "manga",
            MediaKind::LightNovel => "light-novel",
        }
    }

    /// Snapshot document name under the cache directory.
    pub fn snapshot_name(&self) -> &'static str {
        match self {
            MediaKind::Anime => "anime_payloads",
            MediaKind::Manga => "manga_payloads",
            MediaKind::LightNovel => "lightnovel_payloads",
        }
    }

    /// Default identifier list file name.
    pub fn id_file(&self) -> &'static str {
        match self {
            MediaKind::Anime => "anime_ids.txt",
            MediaKind::Manga => "manga_ids.txt",
            MediaKind::LightNovel => "lightnovel_ids.txt",
        }
    }

    /// Uppercase label for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Anime => "ANIME",
            MediaKind::Manga => "MANGA",
            MediaKind::LightNovel => "LIGHTNOVEL",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for MediaKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anime" => Ok(MediaKind::Anime),
            "manga" => Ok(MediaKind::Manga),
            "light-novel" | "lightnovel" => Ok(MediaKind::LightNovel),
            other => Err(AppError::config(format!("Unknown media kind: {other}"))),
        }
    }
}

/// Reading/watching progress placeholder attached to every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStatus {
    Planned,
    OnHold,
    OnProgress,
    Completed,
    Dropped,
}

impl ProgressStatus {
    pub const ALL: [ProgressStatus; 5] = [
        ProgressStatus::Planned,
        ProgressStatus::OnHold,
        ProgressStatus::OnProgress,
        ProgressStatus::Completed,
        ProgressStatus::Dropped,
    ];
}

/// Normalized image triple. Keys stay snake_case to match the backend
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub small_image_url: Option<String>,
}

/// One normalized anime episode, order-preserving from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeRecord {
    /// Formatted air date or "N/A"
    pub aired: String,
    pub number: Option<u32>,
    pub title: Option<String>,
    pub title_japanese: Option<String>,
    pub title_romaji: Option<String>,
}

/// Canonical anime payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeRecord {
    pub mal_id: u32,
    #[serde(rename = "type")]
    pub media_type: String,
    pub status: String,
    pub rating: String,
    pub season: Option<String>,
    pub title: String,
    pub title_japanese: Option<String>,
    pub title_synonyms: String,
    pub source: Option<String>,
    /// Formatted airing window, or the literal status when no window applies
    pub aired: String,
    pub broadcast: String,
    pub episodes_count: Option<u32>,
    pub duration: Option<String>,
    pub score: Option<f64>,
    pub images: ImageSet,
    pub genres: Vec<String>,
    pub studios: Vec<String>,
    pub themes: Vec<String>,
    pub episodes: Vec<EpisodeRecord>,
    pub synopsis: Option<String>,
    pub trailer: Option<String>,
    pub mal_url: Option<String>,
    pub storyline_rating: u8,
    pub quality_rating: u8,
    pub voice_acting_rating: u8,
    pub sound_track_rating: u8,
    pub char_development_rating: u8,
    pub consumed_at: String,
    pub progress_status: ProgressStatus,
}

/// Canonical manga payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaRecord {
    pub mal_id: u32,
    pub status: String,
    pub title: String,
    pub title_japanese: Option<String>,
    pub title_synonyms: String,
    /// Formatted publication window, or the literal status when upcoming
    pub published: String,
    pub chapters_count: Option<u32>,
    pub volumes_count: Option<u32>,
    pub score: Option<f64>,
    pub images: ImageSet,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    pub synopsis: Option<String>,
    pub mal_url: Option<String>,
    pub storyline_rating: u8,
    pub art_style_rating: u8,
    pub char_development_rating: u8,
    pub world_building_rating: u8,
    pub originality_rating: u8,
    pub consumed_at: String,
    pub progress_status: ProgressStatus,
}

/// Canonical light novel payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightNovelRecord {
    pub mal_id: u32,
    pub status: String,
    pub title: String,
    pub title_japanese: Option<String>,
    pub title_synonyms: String,
    pub published: String,
    pub chapters_count: Option<u32>,
    pub volumes_count: Option<u32>,
    pub score: Option<f64>,
    pub images: ImageSet,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    pub synopsis: Option<String>,
    pub mal_url: Option<String>,
    pub storyline_rating: u8,
    pub world_building_rating: u8,
    pub writing_style_rating: u8,
    pub char_development_rating: u8,
    pub originality_rating: u8,
    pub consumed_at: String,
    pub progress_status: ProgressStatus,
}

/// A canonical record of any kind, serialized as the bare payload (the
/// backend endpoint encodes the kind, not the body).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRecord {
    Anime(AnimeRecord),
    Manga(MangaRecord),
    LightNovel(LightNovelRecord),
}

impl MediaRecord {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaRecord::Anime(_) => MediaKind::Anime,
            MediaRecord::Manga(_) => MediaKind::Manga,
            MediaRecord::LightNovel(_) => MediaKind::LightNovel,
        }
    }

    pub fn mal_id(&self) -> u32 {
        match self {
            MediaRecord::Anime(r) => r.mal_id,
            MediaRecord::Manga(r) => r.mal_id,
            MediaRecord::LightNovel(r) => r.mal_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaRecord::Anime(r) => &r.title,
            MediaRecord::Manga(r) => &r.title,
            MediaRecord::LightNovel(r) => &r.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("anime".parse::<MediaKind>().unwrap(), MediaKind::Anime);
        assert_eq!(
            "light-novel".parse::<MediaKind>().unwrap(),
            MediaKind::LightNovel
        );
        assert!("movie".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_kind_paths() {
        assert_eq!(MediaKind::LightNovel.api_path(), "manga");
        assert_eq!(MediaKind::LightNovel.endpoint(), "light-novel");
        assert_eq!(MediaKind::Manga.snapshot_name(), "manga_payloads");
    }

    #[test]
    fn test_progress_status_wire_format() {
        let json = serde_json::to_string(&ProgressStatus::OnProgress).unwrap();
        assert_eq!(json, "\"ON_PROGRESS\"");
    }

    #[test]
    fn test_manga_record_field_names() {
        let record = MangaRecord {
            mal_id: 1,
            status: "Finished".to_string(),
            title: "Monster".to_string(),
            title_japanese: None,
            title_synonyms: String::new(),
            published: "Dec 05, 1994 to Dec 20, 2001".to_string(),
            chapters_count: Some(162),
            volumes_count: Some(18),
            score: Some(9.15),
            images: ImageSet::default(),
            authors: vec!["Urasawa, Naoki".to_string()],
            genres: vec![],
            themes: vec![],
            synopsis: None,
            mal_url: None,
            storyline_rating: 8,
            art_style_rating: 9,
            char_development_rating: 7,
            world_building_rating: 6,
            originality_rating: 8,
            consumed_at: "2022-03-01T00:00:00.000Z".to_string(),
            progress_status: ProgressStatus::Completed,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["malId"], 1);
        assert_eq!(value["chaptersCount"], 162);
        assert_eq!(value["artStyleRating"], 9);
        assert!(value["images"]["image_url"].is_null());
        assert_eq!(value["progressStatus"], "COMPLETED");
    }
}
