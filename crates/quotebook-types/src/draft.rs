use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Data needed to create a quote: everything except `id` and `addedAt`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDraft {
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Draft fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Text,
    Author,
    Source,
    Tags,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Text => "text",
            DraftField::Author => "author",
            DraftField::Source => "source",
            DraftField::Tags => "tags",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const TEXT_REQUIRED: &str = "Текст цитаты обязателен";
pub const AUTHOR_REQUIRED: &str = "Автор цитаты обязателен";

/// Field-to-message mapping produced by [`QuoteDraft::validate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: DraftField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl QuoteDraft {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            source: None,
            tags: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Text and author must be non-empty after trimming. Both are checked so
    /// every failing field is reported at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.text.trim().is_empty() {
            errors.insert(DraftField::Text, TEXT_REQUIRED);
        }
        if self.author.trim().is_empty() {
            errors.insert(DraftField::Author, AUTHOR_REQUIRED);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Trimmed text/author, blank source dropped, empty tag list dropped.
    pub fn normalized(self) -> Self {
        let source = self
            .source
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let tags = self.tags.filter(|tags| !tags.is_empty());

        Self {
            text: self.text.trim().to_string(),
            author: self.author.trim().to_string(),
            source,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_draft() {
        let draft = QuoteDraft::new("Текст", "Автор");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_empty_text_only() {
        let draft = QuoteDraft::new("", "Автор");
        let errors = draft.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(DraftField::Text), Some(TEXT_REQUIRED));
        assert!(!errors.contains(DraftField::Author));
    }

    #[test]
    fn test_validate_treats_whitespace_as_empty() {
        let draft = QuoteDraft::new("   ", "\t\n");
        let errors = draft.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(DraftField::Author), Some(AUTHOR_REQUIRED));
    }

    #[test]
    fn test_normalized_drops_blank_optionals() {
        let draft = QuoteDraft::new("  a  ", " b ")
            .with_source("   ")
            .with_tags(Vec::<String>::new());
        let draft = draft.normalized();

        assert_eq!(draft.text, "a");
        assert_eq!(draft.author, "b");
        assert_eq!(draft.source, None);
        assert_eq!(draft.tags, None);
    }

    #[test]
    fn test_errors_display() {
        let errors = QuoteDraft::default().validate().unwrap_err();
        insta::assert_snapshot!(
            errors.to_string(),
            @"text: Текст цитаты обязателен; author: Автор цитаты обязателен"
        );
    }
}
