use anyhow::Result;
use quotebook_runtime::Quotebook;

use crate::presentation::{QuoteView, QuoteViewModel};

pub fn handle(book: &Quotebook, view: &dyn QuoteView) -> Result<()> {
    let quotes: Vec<QuoteViewModel> = book
        .storage()
        .get_all()
        .iter()
        .map(QuoteViewModel::from)
        .collect();

    view.render_quote_list(&quotes)
}
