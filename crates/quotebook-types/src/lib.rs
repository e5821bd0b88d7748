pub mod draft;
pub mod quote;
pub mod tag;

pub use draft::{DraftField, QuoteDraft, ValidationErrors};
pub use quote::{Quote, QuoteId};
pub use tag::{normalize_tag, push_unique_tag};
