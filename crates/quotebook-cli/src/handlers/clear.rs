use anyhow::Result;
use quotebook_runtime::Quotebook;

use crate::presentation::QuoteView;

pub fn handle(book: &Quotebook, view: &dyn QuoteView) -> Result<()> {
    book.storage().clear();
    tracing::info!(data_dir = %book.data_dir().display(), "collection cleared");
    view.render_cleared()
}
