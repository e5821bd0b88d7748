use anyhow::Result;
use quotebook_runtime::Quotebook;
use quotebook_types::QuoteId;

use crate::presentation::{NotificationViewModel, QuoteView};

pub fn handle(book: &Quotebook, view: &dyn QuoteView, id: &str) -> Result<()> {
    let mut controller = book.controller();
    let deleted = controller.delete_quote(&QuoteId::from(id));

    let notifications: Vec<NotificationViewModel> = controller
        .take_notifications()
        .iter()
        .map(NotificationViewModel::from)
        .collect();

    view.render_quote_deleted(id, deleted, &notifications)
}
