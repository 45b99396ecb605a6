//! Runtime configuration. Defaults are layered with an optional TOML file in
//! the platform config directory and finally with command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::locale::Locale;

/// Name used for the platform config, data and log directories.
pub const APP_NAME: &str = "book-inventory";
/// File name offered for the CSV export, matching earlier downloads.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "inventario_libros.csv";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "book-inventory.log";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub locale: Locale,
    /// Directory the CSV export is written to. Falls back to the user's
    /// download directory when unset.
    pub export_dir: Option<PathBuf>,
    pub export_file_name: String,
    /// Open the exported file with the system handler after writing it.
    pub open_after_export: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            export_dir: None,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            open_after_export: false,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

/// Values supplied on the command line. `None` keeps the config file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<Locale>,
    pub export_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

impl AppConfig {
    /// Parse a config file body. Missing keys keep their defaults.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, or the default config location when `path` is `None`. A
    /// missing file yields the defaults; an unreadable or malformed one is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&contents, &path)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if let Some(dir) = overrides.export_dir {
            self.export_dir = Some(dir);
        }
        if let Some(file) = overrides.log_file {
            self.log_file = Some(file);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    /// Resolved log file location.
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        match ProjectDirs::from("", "", APP_NAME) {
            Some(dirs) => dirs.data_local_dir().join(LOG_FILE_NAME),
            None => PathBuf::from(LOG_FILE_NAME),
        }
    }
}

/// `<platform config dir>/book-inventory/config.toml`, if a home directory
/// can be located.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
