//! Binary entry point: resolve configuration, start the file logger and drive
//! the Ratatui event loop with a fresh, empty inventory. Nothing is loaded
//! from or saved to disk between runs apart from explicit CSV exports.
use std::path::PathBuf;

use anyhow::Context;
use book_inventory::logging::init_logging;
use book_inventory::{run_app, App, AppConfig, Inventory, Locale, Overrides};
use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "book-inventory", about = "Terminal book inventory manager")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language for listings and CSV headers: `es` or `en`
    #[arg(long)]
    locale: Option<Locale>,

    /// Directory the CSV export is written to
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

/// Returning a `Result` bubbles fatal setup problems (an unreadable config
/// file, a terminal that refuses raw mode) to the shell instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref()).context("failed to load config")?;
    config.apply(Overrides {
        locale: args.locale,
        export_dir: args.export_dir,
        log_file: args.log_file,
        log_level: args.log_level,
    });

    // A missing log file should not keep the inventory from opening.
    if let Err(err) = init_logging(&config.log_path(), config.log_level) {
        eprintln!("logging disabled: {err:#}");
    }
    log::info!(
        "starting with locale={} export_file={}",
        config.locale,
        config.export_file_name
    );

    let mut app = App::new(Inventory::new(), config);
    run_app(&mut app)
}
