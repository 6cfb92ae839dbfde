//! # Storefront - An Explicit Reactive State Store
//!
//! A demo shop session driven from a text frontend.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with the built-in demo catalog
//! cargo run
//!
//! # Run with a catalog file
//! cargo run -- --catalog path/to/products.json
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_catalog::InMemoryCatalog;
use storefront_core::{Store, StoreConfig};

mod repl;

/// Storefront - an explicit reactive state store with a text frontend
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON catalog file (falls back to the built-in demo seed)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Config file to load instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &args.config {
        Some(path) => StoreConfig::load_from(path)?,
        None => StoreConfig::load(),
    };

    // Build the catalog: CLI flag wins over config, then the demo seed
    let catalog_path = args.catalog.clone().or_else(|| config.catalog_path.clone());
    let catalog = match catalog_path {
        Some(path) => InMemoryCatalog::from_file(&path)?,
        None => InMemoryCatalog::demo(),
    };

    // The store is the single owned state value for the whole session.
    let store = Store::with_config(catalog, config);

    repl::run(store).await
}
