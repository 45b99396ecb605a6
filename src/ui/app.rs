use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use log::{error, info, warn};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::AppConfig;
use crate::error::ValidationError;
use crate::export::{export_path, open_export, write_export};
use crate::inventory::Inventory;

use super::forms::{BookForm, BookFormKind, ConfirmRemove, PromptForm, PromptKind};
use super::helpers::{centered_rect, cursor_column, surface_error};
use super::screens::{ListingScreen, MenuItem, MenuState, Pane};

const APP_TITLE: &str = "Book Inventory";
/// Width of the sidebar menu, enough for the longest label plus shortcut.
const MENU_WIDTH: u16 = 24;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Lines scrolled by PageUp/PageDown in the listing pane.
const LISTING_PAGE: isize = 10;

/// Fine-grained modes layered on top of the menu and content pane.
enum Mode {
    Normal,
    Editing(BookForm),
    Prompting(PromptForm),
    ConfirmRemove(ConfirmRemove),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state: the session's inventory plus everything the
/// TUI needs to render it.
pub struct App {
    inventory: Inventory,
    config: AppConfig,
    menu: MenuState,
    pane: Pane,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(inventory: Inventory, config: AppConfig) -> Self {
        Self {
            inventory,
            config,
            menu: MenuState::default(),
            pane: Pane::Welcome,
            mode: Mode::Normal,
            status: None,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Feed one key press through the current mode. Returns `true` when the
    /// user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mut mode = mem::replace(&mut self.mode, Mode::Normal);

        mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Editing(form) => self.handle_book_form(code, form)?,
            Mode::Prompting(prompt) => self.handle_prompt(code, prompt)?,
            Mode::ConfirmRemove(confirm) => self.handle_confirm_remove(code, confirm)?,
        };

        self.mode = mode;
        Ok(exit)
    }

    /// Export shortcut, available regardless of the current mode.
    pub(crate) fn handle_ctrl_e(&mut self) -> Result<()> {
        self.run_export();
        Ok(())
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Esc => *exit = true,
            KeyCode::Up => self.menu.move_selection(-1),
            KeyCode::Down => self.menu.move_selection(1),
            KeyCode::Home => self.menu.select_first(),
            KeyCode::End => self.menu.select_last(),
            KeyCode::PageUp => self.scroll_listing(-LISTING_PAGE),
            KeyCode::PageDown => self.scroll_listing(LISTING_PAGE),
            KeyCode::Enter => return Ok(self.activate(self.menu.current(), exit)),
            KeyCode::Char(ch) => {
                if let Some(item) = MenuItem::from_shortcut(ch) {
                    self.menu.select(item);
                    return Ok(self.activate(item, exit));
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    /// Run a menu entry, returning the mode it opens.
    fn activate(&mut self, item: MenuItem, exit: &mut bool) -> Mode {
        match item {
            MenuItem::AddBook => {
                self.clear_status();
                Mode::Editing(BookForm::new(BookFormKind::Add))
            }
            MenuItem::UpdateBook => {
                self.clear_status();
                Mode::Editing(BookForm::new(BookFormKind::Update))
            }
            MenuItem::RemoveBook => {
                self.clear_status();
                Mode::Prompting(PromptForm::new(PromptKind::RemoveByIsbn))
            }
            MenuItem::SearchBook => {
                self.clear_status();
                Mode::Prompting(PromptForm::new(PromptKind::SearchByTitle))
            }
            MenuItem::ListBooks => {
                self.clear_status();
                self.pane = Pane::Listing(ListingScreen::new(&self.inventory, self.config.locale));
                Mode::Normal
            }
            MenuItem::ExportCsv => {
                self.run_export();
                Mode::Normal
            }
            MenuItem::Quit => {
                *exit = true;
                Mode::Normal
            }
        }
    }

    fn handle_book_form(&mut self, code: KeyCode, mut form: BookForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                let message = match form.kind {
                    BookFormKind::Add => "Add book cancelled.",
                    BookFormKind::Update => "Update cancelled.",
                };
                self.set_status(message, StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => keep_open = !self.submit_book_form(&mut form),
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::Editing(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    /// Validate and apply the form. Returns `true` when the form can close.
    fn submit_book_form(&mut self, form: &mut BookForm) -> bool {
        match form.kind {
            BookFormKind::Add => match form.draft().into_book() {
                Ok(book) => {
                    info!("added book isbn={} title={:?}", book.isbn, book.title);
                    let message = format!("Added \"{}\".", book.title);
                    self.inventory.add(book);
                    self.after_change();
                    self.set_status(message, StatusKind::Info);
                    true
                }
                Err(err) => {
                    self.reject_form(form, err);
                    false
                }
            },
            BookFormKind::Update => match form.draft().into_update() {
                Ok((isbn, changes)) => {
                    if self.inventory.update(&isbn, changes) {
                        info!("updated book isbn={isbn}");
                        self.after_change();
                        self.set_status(format!("Updated book {isbn}."), StatusKind::Info);
                        true
                    } else {
                        warn!("update skipped, isbn={isbn} not found");
                        let message = format!("ISBN {isbn} not found in the inventory.");
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                        false
                    }
                }
                Err(err) => {
                    self.reject_form(form, err);
                    false
                }
            },
        }
    }

    fn reject_form(&mut self, form: &mut BookForm, err: ValidationError) {
        warn!("rejected {:?} form: {err}", form.kind);
        let message = err.to_string();
        form.error = Some(message.clone());
        self.set_status(message, StatusKind::Error);
    }

    fn handle_prompt(&mut self, code: KeyCode, mut prompt: PromptForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Backspace => {
                prompt.backspace();
                Ok(Mode::Prompting(prompt))
            }
            KeyCode::Char(ch) => {
                if prompt.push_char(ch) {
                    prompt.error = None;
                }
                Ok(Mode::Prompting(prompt))
            }
            KeyCode::Enter => Ok(self.submit_prompt(prompt)),
            _ => Ok(Mode::Prompting(prompt)),
        }
    }

    fn submit_prompt(&mut self, mut prompt: PromptForm) -> Mode {
        let value = match prompt.parse_input() {
            Ok(value) => value,
            Err(err) => {
                let message = err.to_string();
                prompt.error = Some(message.clone());
                self.set_status(message, StatusKind::Error);
                return Mode::Prompting(prompt);
            }
        };

        match prompt.kind {
            PromptKind::RemoveByIsbn => {
                let matches = self.inventory.count_isbn(&value);
                if matches == 0 {
                    info!("remove requested for isbn={value}, nothing matched");
                    self.set_status(
                        format!("No book with ISBN {value}; nothing removed."),
                        StatusKind::Info,
                    );
                    Mode::Normal
                } else {
                    Mode::ConfirmRemove(ConfirmRemove {
                        isbn: value,
                        matches,
                    })
                }
            }
            PromptKind::SearchByTitle => match self.inventory.find(&value) {
                Some(book) => {
                    let message = format!("Found \"{}\".", book.title);
                    self.pane = Pane::Details(book.clone());
                    self.set_status(message, StatusKind::Info);
                    Mode::Normal
                }
                None => {
                    warn!("search for {value:?} found nothing");
                    let message = "Book not found.".to_string();
                    prompt.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                    Mode::Prompting(prompt)
                }
            },
        }
    }

    fn handle_confirm_remove(&mut self, code: KeyCode, confirm: ConfirmRemove) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                let removed = self.inventory.remove(&confirm.isbn);
                info!("removed {removed} book(s) with isbn={}", confirm.isbn);
                self.after_change();
                let noun = if removed == 1 { "book" } else { "books" };
                self.set_status(
                    format!("Removed {removed} {noun} with ISBN {}.", confirm.isbn),
                    StatusKind::Info,
                );
                Ok(Mode::Normal)
            }
            _ => Ok(Mode::ConfirmRemove(confirm)),
        }
    }

    /// Write the CSV export and report the outcome in the footer.
    fn run_export(&mut self) {
        if let Err(err) = self.export_inventory() {
            error!("export failed: {err:#}");
            self.set_status(surface_error(&err), StatusKind::Error);
        }
    }

    fn export_inventory(&mut self) -> Result<()> {
        let path = export_path(&self.config);
        let written = write_export(&self.inventory, &path, self.config.locale)?;
        let count = self.inventory.len();
        info!("exported {count} books to {}", written.display());
        let noun = if count == 1 { "book" } else { "books" };
        self.set_status(
            format!("Exported {count} {noun} to {}.", written.display()),
            StatusKind::Info,
        );
        if self.config.open_after_export {
            open_export(&written)?;
        }
        Ok(())
    }

    fn after_change(&mut self) {
        self.pane.refresh(&self.inventory, self.config.locale);
    }

    fn scroll_listing(&mut self, delta: isize) {
        if let Pane::Listing(listing) = &mut self.pane {
            listing.scroll_by(delta);
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
            .split(content_area);
        self.draw_menu(frame, columns[0]);
        self.draw_pane(frame, columns[1]);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Editing(form) => self.draw_book_form(frame, area, form),
            Mode::Prompting(prompt) => self.draw_prompt(frame, area, prompt),
            Mode::ConfirmRemove(confirm) => self.draw_confirm_remove(frame, area, confirm),
            Mode::Normal => {}
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .map(|item| ListItem::new(format!("[{}] {}", item.shortcut(), item.label())))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(APP_TITLE))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(self.menu.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_pane(&self, frame: &mut Frame, area: Rect) {
        let count = self.inventory.len();
        let noun = if count == 1 { "book" } else { "books" };
        let locale = self.config.locale;

        match &self.pane {
            Pane::Welcome => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Inventory ({count} {noun})"));
                let lines = vec![
                    Line::from(Span::styled(
                        "Bookshop inventory",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from("Pick an action from the menu or press its shortcut key."),
                    Line::from(Span::styled(
                        "Books live in memory for this session only. Export to CSV to keep a copy.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                let paragraph = Paragraph::new(lines)
                    .block(block)
                    .wrap(Wrap { trim: true })
                    .alignment(Alignment::Left);
                frame.render_widget(paragraph, area);
            }
            Pane::Listing(listing) => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Books ({count} {noun})"));
                let paragraph = Paragraph::new(listing.text.as_str())
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((listing.scroll, 0));
                frame.render_widget(paragraph, area);
            }
            Pane::Details(book) => {
                let block = Block::default().borders(Borders::ALL).title("Book details");
                let paragraph = Paragraph::new(book.render(locale))
                    .block(block)
                    .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, area);
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints: &[(&'static str, &'static str)] = match &self.mode {
            Mode::Editing(_) => &[
                ("[Tab]", " Next field   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            Mode::Prompting(_) => &[("[Enter]", " Submit   "), ("[Esc]", " Cancel")],
            Mode::ConfirmRemove(_) => &[("[y]", " Remove   "), ("[n]", " Keep")],
            Mode::Normal => match self.pane {
                Pane::Listing(_) => &[
                    ("[↑↓]", " Menu   "),
                    ("[Enter]", " Select   "),
                    ("[PgUp/PgDn]", " Scroll   "),
                    ("[Ctrl+E]", " Export   "),
                    ("[q]", " Quit"),
                ],
                _ => &[
                    ("[↑↓]", " Menu   "),
                    ("[Enter]", " Select   "),
                    ("[Ctrl+E]", " Export   "),
                    ("[q]", " Quit"),
                ],
            },
        };

        let spans: Vec<Span<'static>> = hints
            .iter()
            .flat_map(|(key, text)| [Span::styled(*key, key_style), Span::raw(*text)])
            .collect();
        Line::from(spans)
    }

    fn draw_book_form(&self, frame: &mut Frame, area: Rect, form: &BookForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(form.title()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = form
            .fields()
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + cursor_column(form.label(form.active), form.value_len(form.active));
        let cursor_y = inner.y + form.active_index() as u16;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_prompt(&self, frame: &mut Frame, area: Rect, prompt: &PromptForm) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(prompt.title()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![prompt.build_line(), Line::from("")];
        if let Some(error) = &prompt.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to submit • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + cursor_column(prompt.label(), prompt.value.chars().count());
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn draw_confirm_remove(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmRemove) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Confirm Removal").borders(Borders::ALL);
        let noun = if confirm.matches == 1 { "book" } else { "books" };
        let lines = vec![
            Line::from(format!(
                "Remove {} {noun} with ISBN {}?",
                confirm.matches, confirm.isbn
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(Color::Cyan)),
                Span::raw(" Yes   "),
                Span::styled("[n]", Style::default().fg(Color::Cyan)),
                Span::raw(" No"),
            ]),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::models::Book;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let config = AppConfig {
            locale: Locale::English,
            ..AppConfig::default()
        };
        App::new(Inventory::new(), config)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    /// Fill the open form field by field, tabbing between values.
    fn fill_form(app: &mut App, values: [&str; 5]) {
        for (idx, value) in values.iter().enumerate() {
            type_text(app, value);
            if idx + 1 < values.len() {
                press(app, KeyCode::Tab);
            }
        }
    }

    fn add_book(app: &mut App, values: [&str; 5]) {
        press(app, KeyCode::Char('a'));
        fill_form(app, values);
        press(app, KeyCode::Enter);
    }

    fn status_text(app: &App) -> Option<&str> {
        app.status.as_ref().map(|status| status.text.as_str())
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn adding_a_book_through_the_form() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.mode, Mode::Editing(_)));

        fill_form(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(
            app.inventory().books(),
            &[Book::new("Dune", "Herbert", 1965, "Sci-Fi", "111")]
        );
        assert_eq!(status_text(&app), Some("Added \"Dune\"."));
    }

    #[test]
    fn invalid_year_keeps_form_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        fill_form(&mut app, ["Dune", "Herbert", "sixties", "Sci-Fi", "111"]);
        press(&mut app, KeyCode::Enter);

        match &app.mode {
            Mode::Editing(form) => {
                assert_eq!(
                    form.error.as_deref(),
                    Some("The year must be a whole number (got `sixties`).")
                );
            }
            _ => panic!("form should stay open"),
        }
        assert!(app.inventory().is_empty());
    }

    #[test]
    fn empty_field_is_reported() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        fill_form(&mut app, ["Dune", "", "1965", "Sci-Fi", "111"]);
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Editing(_)));
        assert_eq!(
            status_text(&app),
            Some("Please fill in every field (author is empty).")
        );
    }

    #[test]
    fn escape_cancels_form_without_changes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Dune");
        press(&mut app, KeyCode::Esc);

        assert!(matches!(app.mode, Mode::Normal));
        assert!(app.inventory().is_empty());
        assert_eq!(status_text(&app), Some("Add book cancelled."));
    }

    #[test]
    fn updating_existing_and_missing_isbn() {
        let mut app = app();
        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);

        press(&mut app, KeyCode::Char('u'));
        fill_form(&mut app, ["999", "X", "Y", "2000", "Z"]);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, Mode::Editing(_)));
        assert_eq!(status_text(&app), Some("ISBN 999 not found in the inventory."));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('u'));
        fill_form(&mut app, ["111", "Dune (rev)", "Herbert", "1965", "Sci-Fi"]);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.inventory().books()[0].title, "Dune (rev)");
        assert_eq!(app.inventory().books()[0].isbn, "111");
    }

    #[test]
    fn removal_asks_for_confirmation() {
        let mut app = app();
        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);
        add_book(&mut app, ["1984", "Orwell", "1949", "Dystopia", "222"]);

        press(&mut app, KeyCode::Char('d'));
        type_text(&mut app, "222");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            &app.mode,
            Mode::ConfirmRemove(confirm) if confirm.matches == 1 && confirm.isbn == "222"
        ));

        press(&mut app, KeyCode::Char('y'));
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.inventory().len(), 1);
        assert_eq!(status_text(&app), Some("Removed 1 book with ISBN 222."));
    }

    #[test]
    fn declining_removal_keeps_books() {
        let mut app = app();
        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);

        press(&mut app, KeyCode::Char('d'));
        type_text(&mut app, "111");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.inventory().len(), 1);
        assert_eq!(status_text(&app), Some("Removal cancelled."));
    }

    #[test]
    fn removing_unknown_isbn_is_not_an_error() {
        let mut app = app();
        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);

        press(&mut app, KeyCode::Char('d'));
        type_text(&mut app, "000");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.inventory().len(), 1);
        assert!(matches!(app.status, Some(StatusMessage { kind: StatusKind::Info, .. })));
    }

    #[test]
    fn search_shows_details_or_error() {
        let mut app = app();
        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "neuromancer");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(&app.mode, Mode::Prompting(prompt) if prompt.error.as_deref() == Some("Book not found.")));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "DUNE");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(&app.pane, Pane::Details(book) if book.isbn == "111"));
        assert!(render(&app).contains("Title: Dune"));
    }

    #[test]
    fn listing_refreshes_after_changes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert!(render(&app).contains("No books in the inventory."));

        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);
        let screen = render(&app);
        assert!(screen.contains("Book 1:"));
        assert!(screen.contains("Title: Dune"));
    }

    #[test]
    fn menu_enter_activates_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu.current(), MenuItem::SearchBook);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(&app.mode, Mode::Prompting(prompt) if prompt.kind == PromptKind::SearchByTitle));
    }

    #[test]
    fn quit_from_menu() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = self::app();
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn export_writes_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            locale: Locale::English,
            export_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let mut app = App::new(Inventory::new(), config);
        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);

        app.handle_ctrl_e().unwrap();

        let written = std::fs::read_to_string(dir.path().join("inventario_libros.csv")).unwrap();
        assert_eq!(written, "Title,Author,Year,Genre,ISBN\nDune,Herbert,1965,Sci-Fi,111\n");
        assert!(status_text(&app).unwrap().starts_with("Exported 1 book to "));
    }

    #[test]
    fn draws_every_mode() {
        let mut app = app();
        assert!(render(&app).contains("Book Inventory"));

        press(&mut app, KeyCode::Char('a'));
        assert!(render(&app).contains("Add Book"));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('d'));
        assert!(render(&app).contains("ISBN to remove"));
        press(&mut app, KeyCode::Esc);

        add_book(&mut app, ["Dune", "Herbert", "1965", "Sci-Fi", "111"]);
        press(&mut app, KeyCode::Char('d'));
        type_text(&mut app, "111");
        press(&mut app, KeyCode::Enter);
        assert!(render(&app).contains("Remove 1 book with ISBN 111?"));
    }
}
