//! Turns raw form text into typed values. Only two rules exist: no field may
//! be empty and the year must be an integer. Every field is checked for
//! emptiness before the year is parsed, so a half-filled form always reports
//! the missing field first.

use crate::error::{Field, ValidationError};
use crate::models::{Book, BookChanges};

/// Unvalidated text of the five book fields, as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub isbn: String,
}

impl BookDraft {
    /// Validate every field and build a new record.
    pub fn into_book(self) -> Result<Book, ValidationError> {
        let (isbn, changes) = self.into_update()?;
        Ok(Book {
            title: changes.title,
            author: changes.author,
            year: changes.year,
            genre: changes.genre,
            isbn,
        })
    }

    /// Validate every field and split the draft into the ISBN to look up and
    /// the changes to apply to the matching record.
    pub fn into_update(self) -> Result<(String, BookChanges), ValidationError> {
        let title = require(Field::Title, &self.title)?;
        let author = require(Field::Author, &self.author)?;
        let year_raw = require(Field::Year, &self.year)?;
        let genre = require(Field::Genre, &self.genre)?;
        let isbn = require(Field::Isbn, &self.isbn)?;
        let year = parse_year(&year_raw)?;

        Ok((
            isbn,
            BookChanges {
                title,
                author,
                year,
                genre,
            },
        ))
    }
}

/// Trimmed, non-empty ISBN for the remove prompt.
pub fn require_isbn(raw: &str) -> Result<String, ValidationError> {
    require(Field::Isbn, raw)
}

/// Trimmed, non-empty title for the search prompt.
pub fn require_title(raw: &str) -> Result<String, ValidationError> {
    require(Field::Title, raw)
}

/// Parse a year, tolerating surrounding whitespace.
pub fn parse_year(raw: &str) -> Result<i32, ValidationError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidYear(trimmed.to_string()))
}

fn require(field: Field, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookDraft {
        BookDraft {
            title: " Dune ".into(),
            author: "Herbert".into(),
            year: "1965".into(),
            genre: "Sci-Fi".into(),
            isbn: "111 ".into(),
        }
    }

    #[test]
    fn complete_draft_becomes_trimmed_book() {
        let book = draft().into_book().unwrap();
        assert_eq!(book, Book::new("Dune", "Herbert", 1965, "Sci-Fi", "111"));
    }

    #[test]
    fn update_splits_isbn_from_changes() {
        let (isbn, changes) = draft().into_update().unwrap();
        assert_eq!(isbn, "111");
        assert_eq!(changes, BookChanges::new("Dune", "Herbert", 1965, "Sci-Fi"));
    }

    #[test]
    fn blank_field_is_reported() {
        let mut missing_genre = draft();
        missing_genre.genre = "   ".into();
        assert_eq!(
            missing_genre.into_book(),
            Err(ValidationError::MissingField(Field::Genre))
        );
    }

    #[test]
    fn missing_field_wins_over_bad_year() {
        let mut both = draft();
        both.year = "soon".into();
        both.isbn.clear();
        assert_eq!(
            both.into_book(),
            Err(ValidationError::MissingField(Field::Isbn))
        );
    }

    #[test]
    fn non_integer_year_is_rejected() {
        let mut bad = draft();
        bad.year = "19.65".into();
        assert_eq!(
            bad.into_book(),
            Err(ValidationError::InvalidYear("19.65".into()))
        );
    }

    #[test]
    fn year_parsing_accepts_padding_and_sign() {
        assert_eq!(parse_year(" 1965 "), Ok(1965));
        assert_eq!(parse_year("-300"), Ok(-300));
        assert!(parse_year("99999999999").is_err());
    }

    #[test]
    fn prompts_require_text() {
        assert_eq!(require_isbn("  222 "), Ok("222".to_string()));
        assert_eq!(
            require_title(""),
            Err(ValidationError::MissingField(Field::Title))
        );
    }
}
