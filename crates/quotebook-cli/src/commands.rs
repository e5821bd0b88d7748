use anyhow::Result;
use quotebook_runtime::{Quotebook, resolve_data_dir};

use super::args::{Cli, Commands};
use super::handlers;
use crate::logging::{self, LogTarget};
use crate::presentation::ConsoleView;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Tui);

    let book = Quotebook::open(&data_dir)?.ephemeral(cli.ephemeral);

    let log_path = book.log_path();
    let target = match (&command, cli.ephemeral) {
        (Commands::Tui, false) => LogTarget::File(&log_path),
        (Commands::Tui, true) => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target);

    let view = ConsoleView::new(cli.format);

    match command {
        Commands::Tui => handlers::tui::handle(&book),
        Commands::Random => handlers::random::handle(&book, &view),
        Commands::List => handlers::list::handle(&book, &view),
        Commands::Add {
            text,
            author,
            source,
            tags,
        } => handlers::add::handle(&book, &view, text, author, source, tags),
        Commands::Delete { id } => handlers::delete::handle(&book, &view, &id),
        Commands::Clear => handlers::clear::handle(&book, &view),
    }
}
