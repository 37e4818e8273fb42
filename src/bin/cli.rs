//! mediaseed CLI
//!
//! Batch-seeds a media content backend from the Jikan catalog API.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use mediaseed::{
    error::Result,
    models::{Config, MediaKind, RunSummary},
    pipeline,
    services::{BackendClient, CatalogClient},
    storage::LocalStorage,
};

/// mediaseed - Media Catalog Seeding Pipeline
#[derive(Parser, Debug)]
#[command(
    name = "mediaseed",
    version,
    about = "Seeds a content backend from an external media catalog"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "mediaseed.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and normalize records into the snapshot cache
    Snapshot {
        /// Restrict to one media kind (anime, manga, light-novel)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Load cached snapshots into the backend
    Seed {
        /// Restrict to one media kind (anime, manga, light-novel)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Run fetch → normalize → submit directly, skipping the cache
    Pipeline {
        /// Restrict to one media kind (anime, manga, light-novel)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Show per-kind snapshot cache status
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Resolve the kind filter into the fixed processing order.
fn resolve_kinds(kind: Option<&str>) -> Result<Vec<MediaKind>> {
    match kind {
        Some(kind) => Ok(vec![kind.parse()?]),
        None => Ok(MediaKind::ALL.to_vec()),
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("mediaseed starting...");
    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Snapshot { kind } => {
            config.validate()?;
            let kinds = resolve_kinds(kind.as_deref())?;
            let catalog = CatalogClient::new(&config.catalog)?;
            let storage = LocalStorage::new(&config.paths.cache_dir);

            let started = Instant::now();
            let mut summary = RunSummary::new();
            pipeline::run_snapshot(&config, &catalog, &storage, &kinds, &mut summary).await?;

            summary.report();
            log::info!("Time elapsed: {:.2} seconds", started.elapsed().as_secs_f64());
        }

        Command::Seed { kind } => {
            config.validate()?;
            let kinds = resolve_kinds(kind.as_deref())?;
            let backend = BackendClient::new(&config.backend)?;
            let storage = LocalStorage::new(&config.paths.cache_dir);

            let started = Instant::now();
            let mut summary = RunSummary::new();
            pipeline::run_seed(&backend, &storage, &kinds, &mut summary).await?;

            summary.report();
            log::info!("Time elapsed: {:.2} seconds", started.elapsed().as_secs_f64());
        }

        Command::Pipeline { kind } => {
            config.validate()?;
            let kinds = resolve_kinds(kind.as_deref())?;
            let catalog = CatalogClient::new(&config.catalog)?;
            let backend = BackendClient::new(&config.backend)?;

            let started = Instant::now();
            let mut summary = RunSummary::new();
            pipeline::run_direct(&config, &catalog, &backend, &kinds, &mut summary).await?;

            summary.report();
            log::info!("Time elapsed: {:.2} seconds", started.elapsed().as_secs_f64());
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }

        Command::Info => {
            log::info!("Cache directory: {}", config.paths.cache_dir.display());
            let storage = LocalStorage::new(&config.paths.cache_dir);
            for kind in MediaKind::ALL {
                let path = storage.snapshot_path(kind);
                match std::fs::read_to_string(&path) {
                    Ok(content) => {
                        let count = serde_json::from_str::<Vec<serde_json::Value>>(&content)
                            .map(|records| records.len())
                            .unwrap_or(0);
                        log::info!("[{}] {} records at {}", kind.label(), count, path.display());
                    }
                    Err(_) => log::info!("[{}] no snapshot yet", kind.label()),
                }
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
