//! Ratatui front-end for the book inventory. It stands in for the form-based
//! page the inventory was first written for: a sidebar menu on the left, a
//! content pane on the right, modal forms for input, and a footer for status
//! messages and key hints.
//!
//! The `App` owns the session's single `Inventory`; nothing here is global.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
