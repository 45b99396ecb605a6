//! Core library surface for the Book Inventory TUI.
//!
//! The inventory store and book model have no terminal or filesystem
//! dependencies, so the `bin` target and tests can drive them directly. The
//! remaining modules wire configuration, logging, CSV export and the Ratatui
//! front-end around that core.
pub mod config;
pub mod error;
pub mod export;
pub mod inventory;
pub mod locale;
pub mod logging;
pub mod models;
pub mod ui;
pub mod validation;

/// Errors surfaced by the library.
pub use error::{ConfigError, ExportError, Field, ValidationError};

/// The record type and the session-scoped store that holds them.
pub use inventory::Inventory;
pub use locale::Locale;
pub use models::{Book, BookChanges};
pub use validation::BookDraft;

pub use config::{AppConfig, Overrides};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
