use anyhow::Result;
use quotebook_runtime::Quotebook;

use crate::presentation::QuoteTui;

pub fn handle(book: &Quotebook) -> Result<()> {
    let controller = book.controller();
    QuoteTui::new(controller, book.config().ui.transition_ms).run()
}
