use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive quote viewer (default)")]
    Tui,

    #[command(about = "Print a random quote")]
    Random,

    #[command(about = "List every quote in the collection")]
    List,

    #[command(about = "Add a quote to the collection")]
    Add {
        #[arg(long, help = "Quote text")]
        text: String,

        #[arg(long, help = "Quote author")]
        author: String,

        #[arg(long, help = "Book, film or other source")]
        source: Option<String>,

        #[arg(long = "tag", help = "Tag (repeatable, stored lowercase)")]
        tags: Vec<String>,
    },

    #[command(about = "Delete a quote by ID")]
    Delete {
        #[arg(help = "Quote ID as shown by 'list'")]
        id: String,
    },

    #[command(about = "Remove the stored collection (defaults are reseeded on next read)")]
    Clear,
}
