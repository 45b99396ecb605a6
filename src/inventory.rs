//! In-memory book inventory. Records keep their insertion order and every
//! lookup is a linear scan, which is plenty for what one person types into a
//! form during a session. Nothing here touches the terminal or the disk; the
//! UI owns the single `Inventory` for the session and calls in explicitly.
//!
//! Matching rules worth remembering when changing anything below:
//! - titles match case-insensitively, ISBNs match exactly;
//! - `remove` drops every record with the ISBN, while `update` and `find`
//!   only ever touch the first match.

use std::io;

use csv::{Terminator, WriterBuilder};

use crate::error::ExportError;
use crate::locale::Locale;
use crate::models::{Book, BookChanges};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    books: Vec<Book>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Duplicate ISBNs are accepted.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove every record whose ISBN equals `isbn` exactly, returning how
    /// many were dropped. Zero means the inventory is untouched.
    pub fn remove(&mut self, isbn: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.isbn != isbn);
        before - self.books.len()
    }

    /// First record whose title equals `title`, ignoring case.
    pub fn find(&self, title: &str) -> Option<&Book> {
        let wanted = title.to_lowercase();
        self.books
            .iter()
            .find(|book| book.title.to_lowercase() == wanted)
    }

    /// Overwrite title, author, year and genre of the first record with the
    /// given ISBN. Returns `false` and leaves the inventory alone when no
    /// record matches.
    pub fn update(&mut self, isbn: &str, changes: BookChanges) -> bool {
        match self.books.iter_mut().find(|book| book.isbn == isbn) {
            Some(book) => {
                book.apply(changes);
                true
            }
            None => false,
        }
    }

    /// Number of records with the given ISBN. The UI uses it to warn before a
    /// removal that would drop several records at once.
    pub fn count_isbn(&self, isbn: &str) -> usize {
        self.books.iter().filter(|book| book.isbn == isbn).count()
    }

    /// Human-readable listing: each record under a numbered heading, followed
    /// by a blank line. An empty inventory yields a fixed message instead.
    pub fn list(&self, locale: Locale) -> String {
        if self.books.is_empty() {
            return locale.empty_inventory().to_string();
        }

        let mut listing = String::new();
        for (idx, book) in self.books.iter().enumerate() {
            listing.push_str(&locale.record_heading(idx + 1));
            listing.push('\n');
            listing.push_str(&book.render(locale));
            listing.push_str("\n\n");
        }
        listing
    }

    /// CSV text with a header row and one row per record, in inventory order.
    /// Quoting follows the usual rules: fields with commas, quotes or line
    /// breaks are quoted and embedded quotes doubled.
    pub fn export_csv(&self, locale: Locale) -> Result<String, ExportError> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(locale.field_labels())?;
        for book in &self.books {
            let year = book.year.to_string();
            writer.write_record([
                book.title.as_str(),
                book.author.as_str(),
                year.as_str(),
                book.genre.as_str(),
                book.isbn.as_str(),
            ])?;
        }

        let bytes = writer.into_inner().map_err(|err| {
            ExportError::Flush(io::Error::new(err.error().kind(), err.error().to_string()))
        })?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
