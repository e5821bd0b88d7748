use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::draft::QuoteDraft;

/// Opaque quote identifier
///
/// Seeded quotes use short numeric strings ("1".."7"), quotes created at
/// runtime use UUID v4 strings. Nothing should parse the inner value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuoteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QuoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single attributed quote as persisted in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,

    pub text: String,

    pub author: String,

    /// Book, film or other origin of the quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Milliseconds since the Unix epoch
    pub added_at: i64,

    /// Lowercase tags in insertion order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Quote {
    /// Build a quote from a draft, normalizing the draft first.
    pub fn from_draft(id: QuoteId, added_at: i64, draft: QuoteDraft) -> Self {
        let draft = draft.normalized();
        Self {
            id,
            text: draft.text,
            author: draft.author,
            source: draft.source,
            added_at,
            tags: draft.tags,
        }
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn added_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.added_at).single()
    }
}
