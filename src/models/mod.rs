// src/models/mod.rs

//! Domain models for the seeding pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod media;
mod raw;
mod summary;

// Re-export all public types
pub use config::{BackendConfig, CatalogConfig, Config, PathsConfig};
pub use media::{
    AnimeRecord, EpisodeRecord, ImageSet, LightNovelRecord, MangaRecord, MediaKind, MediaRecord,
    ProgressStatus,
};
pub use raw::{
    Envelope, RawBroadcast, RawDateRange, RawEpisode, RawImageSet, RawImages, RawMedia, RawNamed,
    RawTrailer,
};
pub use summary::RunSummary;
