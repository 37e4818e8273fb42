//! Service layer for the seeding pipeline.
//!
//! This module contains the external collaborators:
//! - Catalog lookups (`CatalogClient`)
//! - Backend record submission (`BackendClient`)

mod backend;
mod catalog;

pub use backend::{BackendClient, MediaSubmitter, Outcome};
pub use catalog::{CatalogClient, MediaFetcher};
