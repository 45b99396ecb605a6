//! File logging. The terminal is owned by the TUI, so log output goes to a
//! file and never to stdout or stderr.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Install a `WriteLogger` writing to `path` (truncated on start). Only the
/// first successful call in a process installs a logger.
pub fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create log directory")?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, config, file).context("a logger is already installed")?;
    Ok(())
}
