//! Writes the inventory's CSV projection to disk. The inventory only ever
//! produces text; choosing a location and touching the filesystem happens
//! here so the store stays free of I/O.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, UserDirs};

use crate::config::AppConfig;
use crate::inventory::Inventory;
use crate::locale::Locale;

/// Destination for the CSV export: the configured directory, else the user's
/// download folder, else their home, else the working directory.
pub fn export_path(config: &AppConfig) -> PathBuf {
    let dir = config
        .export_dir
        .clone()
        .or_else(|| UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf)))
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(&config.export_file_name)
}

/// Render the inventory as CSV and write it to `path`, creating missing
/// parent directories. Returns the path written.
pub fn write_export(inventory: &Inventory, path: &Path, locale: Locale) -> Result<PathBuf> {
    let csv = inventory
        .export_csv(locale)
        .context("failed to render inventory as CSV")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create export directory")?;
        }
    }

    fs::write(path, csv)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Hand the exported file to the system's default CSV viewer.
pub fn open_export(path: &Path) -> Result<()> {
    open::that(path).with_context(|| format!("failed to open {}", path.display()))
}
