//! folio - a terminal-rendered personal portfolio
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;

use folio_app::state::{AppState, SiteContext};
use folio_core::prelude::*;
use folio_core::resolver::SearchRoots;

/// folio - a terminal-rendered personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A terminal-rendered personal portfolio", long_about = None)]
struct Args {
    /// Path to the site root (assets and folio.toml)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Render every section as JSON to stdout and exit (no TUI)
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = folio_core::logging::init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    // Site root from args or the current directory
    let site_root = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let settings = folio_app::load_settings(&site_root);

    // A duplicate catalog id is an authoring bug; die before rendering
    // anything rather than serve ambiguous lookups.
    let catalog = match folio_app::site_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ Invalid site content: {e}");
            std::process::exit(1);
        }
    };

    let roots = SearchRoots::discover(&site_root, &settings.assets.dir_name)
        .with_extra_roots(settings.assets.extra_roots.clone());
    let mut context = SiteContext::new(roots);
    if let Some(base) = settings.remote_image_base() {
        context = context.with_remote_base(base);
    }

    info!("site root: {}", site_root.display());

    let mut state = AppState::new(catalog, context, settings);

    if args.headless {
        headless::run(&state)
    } else {
        folio_tui::run(&mut state)
    }
}
