use anyhow::{Result, bail};
use quotebook_runtime::Quotebook;
use quotebook_types::{QuoteDraft, push_unique_tag};

use crate::presentation::{NotificationViewModel, QuoteView, QuoteViewModel};

pub fn handle(
    book: &Quotebook,
    view: &dyn QuoteView,
    text: String,
    author: String,
    source: Option<String>,
    raw_tags: Vec<String>,
) -> Result<()> {
    let mut tags = Vec::new();
    for tag in &raw_tags {
        push_unique_tag(&mut tags, tag);
    }

    let draft = QuoteDraft {
        text,
        author,
        source,
        tags: Some(tags),
    };

    let mut controller = book.controller();
    match controller.add_quote(draft) {
        Ok(quote) => {
            let notifications: Vec<NotificationViewModel> = controller
                .take_notifications()
                .iter()
                .map(NotificationViewModel::from)
                .collect();
            view.render_quote_added(&QuoteViewModel::from(&quote), &notifications)
        }
        Err(errors) => {
            view.render_validation_errors(&errors)?;
            bail!("quote was not saved ({} invalid field(s))", errors.len())
        }
    }
}
