//! Shelf - a filterable product table for the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use shelf_core::FilterState;

/// Shelf - a filterable product table for the terminal
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "A filterable product table for the terminal", long_about = None)]
struct Args {
    /// Catalog file (TOML with [[products]] tables, or a JSON array)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, commands on stdin, no TUI)
    #[arg(long)]
    headless: bool,

    /// Initial filter text (headless mode only)
    #[arg(long, value_name = "TEXT")]
    filter: Option<String>,

    /// Start with "only show products in stock" checked (headless mode only)
    #[arg(long)]
    in_stock: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    shelf_core::logging::init()?;

    let project_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = shelf_app::config::load_settings(&project_path);

    let loaded = shelf::resolve_catalog(args.catalog.as_deref(), &settings)?;

    if args.headless {
        let initial = FilterState::new(args.filter.unwrap_or_default(), args.in_stock);
        shelf::run_headless(loaded.catalog, settings, initial).await?;
    } else {
        if args.filter.is_some() || args.in_stock {
            tracing::warn!("--filter and --in-stock only apply to --headless; ignoring");
        }
        shelf::run(loaded.catalog, settings, loaded.source).await?;
    }

    Ok(())
}
