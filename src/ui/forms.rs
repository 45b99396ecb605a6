use ratatui::text::Line;

use crate::error::ValidationError;
use crate::validation::{require_isbn, require_title, BookDraft};

use super::helpers::field_line;

/// Whether the book form creates a record or edits one located by ISBN.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BookFormKind {
    Add,
    Update,
}

/// Fields available within the book form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BookField {
    Title,
    Author,
    Year,
    Genre,
    Isbn,
}

/// Internal representation of the add/update form. Values stay raw text until
/// submission so validation errors can point at what was actually typed.
#[derive(Clone)]
pub(crate) struct BookForm {
    pub(crate) kind: BookFormKind,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) isbn: String,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

impl BookForm {
    pub(crate) fn new(kind: BookFormKind) -> Self {
        let mut form = Self {
            kind,
            title: String::new(),
            author: String::new(),
            year: String::new(),
            genre: String::new(),
            isbn: String::new(),
            active: BookField::Title,
            error: None,
        };
        form.active = form.fields()[0];
        form
    }

    /// Field order for this kind of form. Updates ask for the ISBN first since
    /// it selects the record to change.
    pub(crate) fn fields(&self) -> [BookField; 5] {
        match self.kind {
            BookFormKind::Add => [
                BookField::Title,
                BookField::Author,
                BookField::Year,
                BookField::Genre,
                BookField::Isbn,
            ],
            BookFormKind::Update => [
                BookField::Isbn,
                BookField::Title,
                BookField::Author,
                BookField::Year,
                BookField::Genre,
            ],
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.kind {
            BookFormKind::Add => "Add Book",
            BookFormKind::Update => "Update Book",
        }
    }

    pub(crate) fn label(&self, field: BookField) -> &'static str {
        match (self.kind, field) {
            (BookFormKind::Add, BookField::Title) => "Title",
            (BookFormKind::Add, BookField::Author) => "Author",
            (BookFormKind::Add, BookField::Year) => "Year",
            (BookFormKind::Add, BookField::Genre) => "Genre",
            (BookFormKind::Add, BookField::Isbn) => "ISBN",
            (BookFormKind::Update, BookField::Isbn) => "ISBN to update",
            (BookFormKind::Update, BookField::Title) => "New title",
            (BookFormKind::Update, BookField::Author) => "New author",
            (BookFormKind::Update, BookField::Year) => "New year",
            (BookFormKind::Update, BookField::Genre) => "New genre",
        }
    }

    /// Position of the active field within `fields()`, used for cursor rows.
    pub(crate) fn active_index(&self) -> usize {
        self.fields()
            .iter()
            .position(|field| *field == self.active)
            .unwrap_or(0)
    }

    pub(crate) fn next_field(&mut self) {
        let fields = self.fields();
        self.active = fields[(self.active_index() + 1) % fields.len()];
    }

    pub(crate) fn previous_field(&mut self) {
        let fields = self.fields();
        self.active = fields[(self.active_index() + fields.len() - 1) % fields.len()];
    }

    pub(crate) fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Year => &self.year,
            BookField::Genre => &self.genre,
            BookField::Isbn => &self.isbn,
        }
    }

    fn value_mut(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Year => &mut self.year,
            BookField::Genre => &mut self.genre,
            BookField::Isbn => &mut self.isbn,
        }
    }

    /// Append a character to the active field. Control characters are ignored;
    /// the year accepts anything so a bad value is reported on submit.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let field = self.active;
        self.value_mut(field).push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        let field = self.active;
        self.value_mut(field).pop();
    }

    /// Snapshot the raw values for validation.
    pub(crate) fn draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.clone(),
            genre: self.genre.clone(),
            isbn: self.isbn.clone(),
        }
    }

    pub(crate) fn build_line(&self, field: BookField) -> Line<'static> {
        field_line(
            self.label(field),
            self.value(field),
            "<required>",
            self.active == field,
        )
    }

    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.value(field).chars().count()
    }
}

/// What a single-field prompt is asking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PromptKind {
    RemoveByIsbn,
    SearchByTitle,
}

/// Single-line input used for removal and search.
#[derive(Clone)]
pub(crate) struct PromptForm {
    pub(crate) kind: PromptKind,
    pub(crate) value: String,
    pub(crate) error: Option<String>,
}

impl PromptForm {
    pub(crate) fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            value: String::new(),
            error: None,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::RemoveByIsbn => "Remove Book",
            PromptKind::SearchByTitle => "Search Book",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self.kind {
            PromptKind::RemoveByIsbn => "ISBN to remove",
            PromptKind::SearchByTitle => "Title to search",
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.value.pop();
    }

    /// Trimmed input, or the validation error to show when it is blank.
    pub(crate) fn parse_input(&self) -> Result<String, ValidationError> {
        match self.kind {
            PromptKind::RemoveByIsbn => require_isbn(&self.value),
            PromptKind::SearchByTitle => require_title(&self.value),
        }
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        field_line(self.label(), &self.value, "<required>", true)
    }
}

/// Pending removal, shown with the number of records it will drop.
#[derive(Clone)]
pub(crate) struct ConfirmRemove {
    pub(crate) isbn: String,
    pub(crate) matches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    fn fill(form: &mut BookForm, values: [&str; 5]) {
        for value in values {
            for ch in value.chars() {
                form.push_char(ch);
            }
            form.next_field();
        }
    }

    #[test]
    fn add_form_cycles_through_fields_in_order() {
        let mut form = BookForm::new(BookFormKind::Add);
        assert_eq!(form.active, BookField::Title);
        form.next_field();
        form.next_field();
        assert_eq!(form.active, BookField::Year);
        form.previous_field();
        form.previous_field();
        form.previous_field();
        assert_eq!(form.active, BookField::Isbn);
    }

    #[test]
    fn update_form_starts_on_isbn() {
        let form = BookForm::new(BookFormKind::Update);
        assert_eq!(form.active, BookField::Isbn);
        assert_eq!(form.label(BookField::Isbn), "ISBN to update");
    }

    #[test]
    fn typed_values_land_in_the_active_field() {
        let mut form = BookForm::new(BookFormKind::Add);
        fill(&mut form, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);
        assert_eq!(form.title, "Dune");
        assert_eq!(form.isbn, "111");
        assert_eq!(form.active, BookField::Title);

        form.backspace();
        assert_eq!(form.title, "Dun");
        assert!(!form.push_char('\u{7}'));
        assert_eq!(form.value_len(BookField::Title), 3);
    }

    #[test]
    fn update_draft_maps_fields_by_name() {
        let mut form = BookForm::new(BookFormKind::Update);
        fill(&mut form, ["111", "Dune (rev)", "Herbert", "1965", "Sci-Fi"]);
        let (isbn, changes) = form.draft().into_update().unwrap();
        assert_eq!(isbn, "111");
        assert_eq!(changes.title, "Dune (rev)");
        assert_eq!(changes.year, 1965);
    }

    #[test]
    fn prompt_rejects_blank_input() {
        let mut prompt = PromptForm::new(PromptKind::SearchByTitle);
        assert_eq!(
            prompt.parse_input(),
            Err(ValidationError::MissingField(Field::Title))
        );
        for ch in "  dune ".chars() {
            prompt.push_char(ch);
        }
        assert_eq!(prompt.parse_input(), Ok("dune".to_string()));
    }
}
