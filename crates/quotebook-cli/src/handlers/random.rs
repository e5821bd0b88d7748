use anyhow::Result;
use quotebook_runtime::Quotebook;

use crate::presentation::{QuoteView, QuoteViewModel};

pub fn handle(book: &Quotebook, view: &dyn QuoteView) -> Result<()> {
    let mut controller = book.controller();
    controller.mount();

    let model = controller.current().map(QuoteViewModel::from);
    view.render_quote(model.as_ref())
}
