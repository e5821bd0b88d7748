use quotebook_runtime::Notification;
use quotebook_types::Quote;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteViewModel {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub tags: Vec<String>,
    /// `YYYY-MM-DD` in UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_on: Option<String>,
}

impl From<&Quote> for QuoteViewModel {
    fn from(quote: &Quote) -> Self {
        Self {
            id: quote.id.to_string(),
            text: quote.text.clone(),
            author: quote.author.clone(),
            // Older records may hold an empty source string
            source: quote.source.clone().filter(|s| !s.trim().is_empty()),
            tags: quote.tags().to_vec(),
            added_on: quote
                .added_at_utc()
                .map(|ts| ts.format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationViewModel {
    pub title: String,
    pub description: String,
}

impl From<&Notification> for NotificationViewModel {
    fn from(notification: &Notification) -> Self {
        Self {
            title: notification.title.to_string(),
            description: notification.description.to_string(),
        }
    }
}
