//! Anime record mapping.

use crate::error::Result;
use crate::models::{AnimeRecord, EpisodeRecord, RawEpisode, RawMedia};

use super::{Decorations, format_date, format_range, join_synonyms, require, select_images};

/// Map one raw anime record plus its episode sub-resource.
pub fn normalize(raw: &RawMedia, episodes: &[RawEpisode]) -> Result<AnimeRecord> {
    let mal_id = require(raw.mal_id, "mal_id")?;
    let title = require(raw.title.clone(), "title")?;

    let media_type = raw.media_type.clone().unwrap_or_else(|| "N/A".to_string());
    let status = raw.status.clone().unwrap_or_else(|| "N/A".to_string());

    // The airing window only applies to TV entries that have started airing;
    // everything else carries the literal status instead of a date range.
    let aired = if media_type == "TV" && status != "Not yet aired" {
        format_range(raw.aired.as_ref(), "aired")?
    } else {
        status.clone()
    };

    let season = match (raw.season.as_deref(), raw.year) {
        (Some(season), Some(year)) => Some(format!("{} {}", season.to_uppercase(), year)),
        _ => None,
    };

    let broadcast = raw
        .broadcast
        .as_ref()
        .and_then(|b| b.string.clone())
        .unwrap_or_else(|| "N/A".to_string());

    let trailer = raw
        .trailer
        .as_ref()
        .and_then(|t| t.embed_url.as_ref())
        .map(|url| url.replace("autoplay=1", "autoplay=0"));

    let episodes = episodes
        .iter()
        .map(map_episode)
        .collect::<Result<Vec<_>>>()?;

    let deco = Decorations::draw();

    Ok(AnimeRecord {
        mal_id,
        media_type,
        status,
        rating: raw.rating.clone().unwrap_or_else(|| "Unrated".to_string()),
        season,
        title,
        title_japanese: raw.title_japanese.clone(),
        title_synonyms: join_synonyms(&raw.title_synonyms),
        source: raw.source.clone(),
        aired,
        broadcast,
        episodes_count: raw.episodes,
        duration: raw.duration.clone(),
        score: raw.score,
        images: select_images(raw.images.as_ref()),
        genres: raw.genres.iter().map(|g| g.name.clone()).collect(),
        studios: raw.studios.iter().map(|s| s.name.clone()).collect(),
        themes: raw.themes.iter().map(|t| t.name.clone()).collect(),
        episodes,
        synopsis: raw.synopsis.clone(),
        trailer,
        mal_url: raw.url.clone(),
        storyline_rating: deco.ratings[0],
        quality_rating: deco.ratings[1],
        voice_acting_rating: deco.ratings[2],
        sound_track_rating: deco.ratings[3],
        char_development_rating: deco.ratings[4],
        consumed_at: deco.consumed_at,
        progress_status: deco.progress_status,
    })
}

fn map_episode(episode: &RawEpisode) -> Result<EpisodeRecord> {
    let aired = match episode.aired.as_deref() {
        Some(value) => format_date(value, "episodes.aired")?,
        None => "N/A".to_string(),
    };
    Ok(EpisodeRecord {
        aired,
        number: episode.mal_id,
        title: episode.title.clone(),
        title_japanese: episode.title_japanese.clone(),
        title_romaji: episode.title_romanji.clone(),
    })
}
