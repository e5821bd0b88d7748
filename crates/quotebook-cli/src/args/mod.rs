mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "quotebook")]
#[command(about = "A local collection of inspirational quotes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $QUOTEBOOK_PATH or the XDG data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Keep the collection in memory only; nothing is written to disk"
    )]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
