//! Presentation layer
//!
//! - `view_models`: display-ready data derived from domain types
//! - `formatters`: pure string rendering for console output
//! - `form`: local state of the quote creation form
//! - `renderers`: console (plain/JSON) output
//! - `tui`: full-screen ratatui viewer

pub mod form;
pub mod formatters;
pub mod renderers;
pub mod tui;
pub mod view_models;

pub use form::{FormFocus, QuoteForm};
pub use renderers::{ConsoleView, QuoteView};
pub use tui::QuoteTui;
pub use view_models::{NotificationViewModel, QuoteViewModel};
