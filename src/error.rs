//! Typed errors for the library surface. The TUI and binary wrap these in
//! `anyhow` where they only need to be displayed.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Form fields that can be reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Year,
    Genre,
    Isbn,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Year => "year",
            Field::Genre => "genre",
            Field::Isbn => "ISBN",
        };
        f.write_str(name)
    }
}

/// Raised while turning raw form text into typed values, before the
/// inventory is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in every field ({0} is empty).")]
    MissingField(Field),
    #[error("The year must be a whole number (got `{0}`).")]
    InvalidYear(String),
}

/// Failures while building the CSV projection.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV record")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer")]
    Flush(#[source] io::Error),
    #[error("CSV output is not valid UTF-8")]
    Encoding(#[from] FromUtf8Error),
}

/// Failures while loading the optional config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
