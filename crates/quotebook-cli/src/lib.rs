// NOTE: quotebook Architecture
//
// quotebook-types    Quote / QuoteDraft records and draft validation
// quotebook-store    the collection under one key of a local key-value store
// quotebook-runtime  PageController (Viewing/Composing), config, data dir
// quotebook          this crate: clap surface, console output, ratatui UI
//
// Storage failures never reach this crate. They are logged by the store and
// masked as defaults or dropped writes, so handlers only deal with
// configuration errors and draft validation.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
