//! Domain models passed between the inventory store and the TUI. These types
//! stay plain data holders so the store can focus on ordering and matching
//! while the UI focuses on input and presentation.

use std::fmt;

use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single book entry. All five fields are always present; validation of the
/// raw form text happens before a `Book` is ever built.
pub struct Book {
    /// Title shown in listings and matched case-insensitively by searches.
    pub title: String,
    pub author: String,
    /// Publication year. Kept as an integer so the CSV export and listings
    /// print it exactly as entered.
    pub year: i32,
    pub genre: String,
    /// Lookup key for updates and removals. Not unique: the inventory accepts
    /// duplicates and resolves them by position.
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            isbn: isbn.into(),
        }
    }

    /// Render the record as five labelled lines: title, author, year, genre
    /// and ISBN, in that order. No trailing newline.
    pub fn render(&self, locale: Locale) -> String {
        let labels = locale.field_labels();
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}",
            labels[0],
            self.title,
            labels[1],
            self.author,
            labels[2],
            self.year,
            labels[3],
            self.genre,
            labels[4],
            self.isbn
        )
    }

    /// Overwrite every mutable field. The ISBN is left untouched.
    pub(crate) fn apply(&mut self, changes: BookChanges) {
        self.title = changes.title;
        self.author = changes.author;
        self.year = changes.year;
        self.genre = changes.genre;
    }
}

impl fmt::Display for Book {
    /// Uses the default locale so the type plays nicely with widgets that
    /// take anything `Display`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Replacement values for an update. The ISBN is deliberately absent: it
/// identifies the record and cannot be edited.
pub struct BookChanges {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

impl BookChanges {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Herbert", 1965, "Sci-Fi", "111")
    }

    #[test]
    fn render_lists_fields_in_fixed_order() {
        let rendered = dune().render(Locale::English);
        assert_eq!(
            rendered,
            "Title: Dune\nAuthor: Herbert\nYear: 1965\nGenre: Sci-Fi\nISBN: 111"
        );
    }

    #[test]
    fn display_uses_spanish_labels_by_default() {
        let rendered = dune().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Título: Dune",
                "Autor: Herbert",
                "Año: 1965",
                "Género: Sci-Fi",
                "ISBN: 111"
            ]
        );
    }

    #[test]
    fn apply_keeps_isbn() {
        let mut book = dune();
        book.apply(BookChanges::new("Dune Messiah", "F. Herbert", 1969, "SF"));
        assert_eq!(
            book,
            Book::new("Dune Messiah", "F. Herbert", 1969, "SF", "111")
        );
    }
}
