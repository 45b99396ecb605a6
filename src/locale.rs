//! Label sets for everything the inventory itself renders: record fields,
//! listing headings and CSV column names. Spanish is the default.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Labels for title, author, year, genre and ISBN, in that order. Shared by
    /// the record rendering and the CSV header so the two never drift apart.
    pub fn field_labels(self) -> [&'static str; 5] {
        match self {
            Locale::Spanish => ["Título", "Autor", "Año", "Género", "ISBN"],
            Locale::English => ["Title", "Author", "Year", "Genre", "ISBN"],
        }
    }

    /// Heading placed before each record in a listing.
    pub fn record_heading(self, position: usize) -> String {
        match self {
            Locale::Spanish => format!("Libro {position}:"),
            Locale::English => format!("Book {position}:"),
        }
    }

    /// Message shown instead of a listing when the inventory is empty.
    pub fn empty_inventory(self) -> &'static str {
        match self {
            Locale::Spanish => "No hay libros en el inventario.",
            Locale::English => "No books in the inventory.",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Spanish => "es",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" | "spanish" | "español" => Ok(Locale::Spanish),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("unsupported locale `{other}` (expected `es` or `en`)")),
        }
    }
}
