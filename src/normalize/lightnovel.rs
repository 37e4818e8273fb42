//! Light novel record mapping.
//!
//! Light novels come from the catalog's manga resource; only the decorative
//! rating set differs from the manga mapping.

use crate::error::Result;
use crate::models::{LightNovelRecord, RawMedia};

use super::{Decorations, format_range, join_synonyms, require, select_images};

/// Map one raw light novel record.
pub fn normalize(raw: &RawMedia) -> Result<LightNovelRecord> {
    let mal_id = require(raw.mal_id, "mal_id")?;
    let title = require(raw.title.clone(), "title")?;

    let status = raw.status.clone().unwrap_or_else(|| "N/A".to_string());
    let published = if status == "Upcoming" {
        status.clone()
    } else {
        format_range(raw.published.as_ref(), "published")?
    };

    let deco = Decorations::draw();

    Ok(LightNovelRecord {
        mal_id,
        status,
        title,
        title_japanese: raw.title_japanese.clone(),
        title_synonyms: join_synonyms(&raw.title_synonyms),
        published,
        chapters_count: raw.chapters,
        volumes_count: raw.volumes,
        score: raw.score,
        images: select_images(raw.images.as_ref()),
        authors: raw.authors.iter().map(|a| a.name.clone()).collect(),
        genres: raw.genres.iter().map(|g| g.name.clone()).collect(),
        themes: raw.themes.iter().map(|t| t.name.clone()).collect(),
        synopsis: raw.synopsis.clone(),
        mal_url: raw.url.clone(),
        storyline_rating: deco.ratings[0],
        world_building_rating: deco.ratings[1],
        writing_style_rating: deco.ratings[2],
        char_development_rating: deco.ratings[3],
        originality_rating: deco.ratings[4],
        consumed_at: deco.consumed_at,
        progress_status: deco.progress_status,
    })
}
