use std::cmp::min;

use crate::inventory::Inventory;
use crate::locale::Locale;
use crate::models::Book;

/// Entries of the sidebar menu, in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MenuItem {
    AddBook,
    UpdateBook,
    RemoveBook,
    SearchBook,
    ListBooks,
    ExportCsv,
    Quit,
}

impl MenuItem {
    pub(crate) const ALL: [MenuItem; 7] = [
        MenuItem::AddBook,
        MenuItem::UpdateBook,
        MenuItem::RemoveBook,
        MenuItem::SearchBook,
        MenuItem::ListBooks,
        MenuItem::ExportCsv,
        MenuItem::Quit,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuItem::AddBook => "Add book",
            MenuItem::UpdateBook => "Update book",
            MenuItem::RemoveBook => "Remove book",
            MenuItem::SearchBook => "Search book",
            MenuItem::ListBooks => "List books",
            MenuItem::ExportCsv => "Export CSV",
            MenuItem::Quit => "Quit",
        }
    }

    /// Single-key shortcut shown next to the label.
    pub(crate) fn shortcut(self) -> char {
        match self {
            MenuItem::AddBook => 'a',
            MenuItem::UpdateBook => 'u',
            MenuItem::RemoveBook => 'd',
            MenuItem::SearchBook => '/',
            MenuItem::ListBooks => 'l',
            MenuItem::ExportCsv => 'x',
            MenuItem::Quit => 'q',
        }
    }

    pub(crate) fn from_shortcut(ch: char) -> Option<MenuItem> {
        let lower = ch.to_ascii_lowercase();
        MenuItem::ALL.into_iter().find(|item| item.shortcut() == lower)
    }
}

/// Selection state for the sidebar menu.
#[derive(Default)]
pub(crate) struct MenuState {
    pub(crate) selected: usize,
}

impl MenuState {
    pub(crate) fn current(&self) -> MenuItem {
        MenuItem::ALL[min(self.selected, MenuItem::ALL.len() - 1)]
    }

    /// Move up or down, wrapping around at either end.
    pub(crate) fn move_selection(&mut self, offset: isize) {
        let len = MenuItem::ALL.len() as isize;
        let next = (self.selected as isize + offset).rem_euclid(len);
        self.selected = next as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.selected = MenuItem::ALL.len() - 1;
    }

    pub(crate) fn select(&mut self, item: MenuItem) {
        if let Some(idx) = MenuItem::ALL.iter().position(|candidate| *candidate == item) {
            self.selected = idx;
        }
    }
}

/// Scrollable text of the "List books" pane.
pub(crate) struct ListingScreen {
    pub(crate) text: String,
    pub(crate) scroll: u16,
}

impl ListingScreen {
    pub(crate) fn new(inventory: &Inventory, locale: Locale) -> Self {
        Self {
            text: inventory.list(locale),
            scroll: 0,
        }
    }

    /// Re-render after the inventory changed, keeping the scroll offset when
    /// it still fits.
    pub(crate) fn refresh(&mut self, inventory: &Inventory, locale: Locale) {
        self.text = inventory.list(locale);
        self.scroll = min(self.scroll, self.max_scroll());
    }

    pub(crate) fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    pub(crate) fn max_scroll(&self) -> u16 {
        self.line_count().saturating_sub(1).min(u16::MAX as usize) as u16
    }

    pub(crate) fn scroll_by(&mut self, delta: isize) {
        let next = (self.scroll as isize + delta).clamp(0, self.max_scroll() as isize);
        self.scroll = next as u16;
    }
}

/// What the right-hand content pane currently shows.
pub(crate) enum Pane {
    Welcome,
    Listing(ListingScreen),
    Details(Book),
}

impl Pane {
    /// Bring the pane in line with the inventory after a mutation. A details
    /// view follows the first record that still carries its ISBN and falls
    /// back to the welcome screen once none does.
    pub(crate) fn refresh(&mut self, inventory: &Inventory, locale: Locale) {
        let vanished = match self {
            Pane::Welcome => false,
            Pane::Listing(listing) => {
                listing.refresh(inventory, locale);
                false
            }
            Pane::Details(book) => {
                match inventory.books().iter().find(|b| b.isbn == book.isbn) {
                    Some(current) => {
                        *book = current.clone();
                        false
                    }
                    None => true,
                }
            }
        };
        if vanished {
            *self = Pane::Welcome;
        }
    }
}
