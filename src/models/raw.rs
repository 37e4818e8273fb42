//! Raw catalog response shapes.
//!
//! Mirrors the Jikan v4 JSON documents as loosely as possible: every field
//! the upstream may omit or null is an `Option`, and unknown fields are
//! ignored. These structs are read-only inputs to the normalizer.

use serde::Deserialize;

/// Response envelope wrapping every catalog payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// One raw catalog record for any media kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMedia {
    pub mal_id: Option<u32>,
    pub url: Option<String>,
    pub images: Option<RawImages>,
    pub trailer: Option<RawTrailer>,
    pub title: Option<String>,
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub title_synonyms: Vec<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub source: Option<String>,
    pub status: Option<String>,
    pub aired: Option<RawDateRange>,
    pub published: Option<RawDateRange>,
    pub episodes: Option<u32>,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub duration: Option<String>,
    pub rating: Option<String>,
    pub score: Option<f64>,
    pub season: Option<String>,
    pub year: Option<i32>,
    pub broadcast: Option<RawBroadcast>,
    pub synopsis: Option<String>,
    #[serde(default)]
    pub authors: Vec<RawNamed>,
    #[serde(default)]
    pub genres: Vec<RawNamed>,
    #[serde(default)]
    pub studios: Vec<RawNamed>,
    #[serde(default)]
    pub themes: Vec<RawNamed>,
}

/// The catalog serves each record's art in two formats.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImages {
    pub jpg: Option<RawImageSet>,
    pub webp: Option<RawImageSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
    pub small_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrailer {
    pub embed_url: Option<String>,
}

/// Airing/publication window with RFC 3339 timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBroadcast {
    pub string: Option<String>,
}

/// A named sub-entity (genre, theme, studio, author).
#[derive(Debug, Clone, Deserialize)]
pub struct RawNamed {
    pub name: String,
}

/// One raw episode from the anime episode sub-resource.
///
/// `title_romanji` matches the catalog's own (misspelled) key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEpisode {
    pub mal_id: Option<u32>,
    pub title: Option<String>,
    pub title_japanese: Option<String>,
    pub title_romanji: Option<String>,
    pub aired: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_record() {
        let json = r#"{
            "data": {
                "mal_id": 21,
                "url": "https://myanimelist.net/anime/21/One_Piece",
                "title": "One Piece",
                "type": "TV",
                "status": "Currently Airing",
                "aired": { "from": "1999-10-20T00:00:00+00:00", "to": null },
                "images": {
                    "jpg": { "image_url": "https://cdn.example/21.jpg" }
                },
                "genres": [ { "mal_id": 1, "name": "Action" } ],
                "score": 8.73,
                "some_future_field": true
            }
        }"#;

        let envelope: Envelope<RawMedia> = serde_json::from_str(json).unwrap();
        let raw = envelope.data;
        assert_eq!(raw.mal_id, Some(21));
        assert_eq!(raw.media_type.as_deref(), Some("TV"));
        assert_eq!(raw.aired.as_ref().unwrap().to, None);
        assert!(raw.images.as_ref().unwrap().webp.is_none());
        assert_eq!(raw.genres[0].name, "Action");
        assert!(raw.title_synonyms.is_empty());
    }

    #[test]
    fn test_deserialize_episode_list() {
        let json = r#"{
            "data": [
                { "mal_id": 1, "title": "Asteroid Blues", "aired": "1998-10-24T00:00:00+00:00" },
                { "mal_id": 2, "title": "Stray Dog Strut", "aired": null, "title_romanji": "Nora Inu no Strut" }
            ]
        }"#;

        let envelope: Envelope<Vec<RawEpisode>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[1].aired, None);
        assert_eq!(
            envelope.data[1].title_romanji.as_deref(),
            Some("Nora Inu no Strut")
        );
    }
}
