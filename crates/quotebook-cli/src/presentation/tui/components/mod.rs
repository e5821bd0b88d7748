//! Widgets composing the quotebook screen

mod placeholder;
mod quote_card;
mod quote_form;
mod status_bar;
mod toast;

pub(crate) use placeholder::{PlaceholderKind, PlaceholderView};
pub(crate) use quote_card::QuoteCardView;
pub(crate) use quote_form::QuoteFormView;
pub(crate) use status_bar::StatusBarView;
pub(crate) use toast::ToastView;
