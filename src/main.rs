use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use bookshelf::{
    cli::commands::handler_for,
    cli::Cli,
    config::{LogLevel, SettingsLoader},
    io::{EmptyReason, LoadStatus},
    CatalogStore,
};

/// Initialize tracing, logging to stderr. `RUST_LOG` wins over the
/// resolved log level when set.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => SettingsLoader::with_file(path),
        None => SettingsLoader::new(),
    };
    let settings = loader
        .resolve(&cli.overrides())
        .context("Failed to resolve settings")?;

    initialize_tracing(settings.log_level);
    debug!("Using catalog {}", settings.catalog_path.display());

    let mut store = CatalogStore::open(&settings.catalog_path).with_context(|| {
        format!(
            "Failed to open catalog {}",
            settings.catalog_path.display()
        )
    })?;

    match store.load_status() {
        LoadStatus::Loaded { count } => info!("Library loaded ({} books)", count),
        LoadStatus::StartedEmpty {
            reason: EmptyReason::Missing,
        } => info!("Starting with an empty library"),
        LoadStatus::StartedEmpty {
            reason: EmptyReason::Unparseable(msg),
        } => warn!("Starting with an empty library, existing file unreadable: {}", msg),
    }

    let modifies = cli.command.modifies_catalog();
    let handler = handler_for(cli.command);
    debug!("Running {} command", handler.name());

    let result = handler.execute(&mut store)?;
    if let Some(message) = result.message() {
        println!("{}", message);
    }

    // Mutations are already on disk; rewrite on exit only a catalog that was
    // read successfully so an unreadable file is never replaced by a read-only command.
    if !modifies && store.load_status().is_loaded() {
        store.save().context("Failed to save catalog on exit")?;
    }

    std::process::exit(result.exit_code());
}
