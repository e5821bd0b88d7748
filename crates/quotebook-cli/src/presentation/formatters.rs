use owo_colors::OwoColorize;
use quotebook_types::{DraftField, ValidationErrors};

use super::view_models::{NotificationViewModel, QuoteViewModel};

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Human label for a form field, as shown next to the input
pub fn field_label(field: DraftField) -> &'static str {
    match field {
        DraftField::Text => "Текст цитаты",
        DraftField::Author => "Автор",
        DraftField::Source => "Источник",
        DraftField::Tags => "Теги",
    }
}

pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_quote(quote: &QuoteViewModel, color: bool) -> String {
    let mut lines = Vec::new();

    let text = format!("«{}»", quote.text);
    lines.push(if color { text.bold().to_string() } else { text });

    let mut attribution = format!("— {}", quote.author);
    if let Some(source) = &quote.source {
        attribution.push_str(&format!(", {}", source));
    }
    lines.push(if color {
        attribution.cyan().to_string()
    } else {
        attribution
    });

    if !quote.tags.is_empty() {
        let tags = format_tags(&quote.tags);
        lines.push(if color { tags.dimmed().to_string() } else { tags });
    }

    lines.join("\n")
}

/// One line per quote: `ID  AUTHOR  TEXT`
pub fn format_quote_row(quote: &QuoteViewModel) -> String {
    format!(
        "{:<38} {:<24} {}",
        quote.id,
        truncate(&quote.author, 24),
        truncate(&quote.text, 60)
    )
}

pub fn format_notification(notification: &NotificationViewModel, color: bool) -> String {
    let title = if color {
        notification.title.green().to_string()
    } else {
        notification.title.clone()
    };
    format!("✓ {}: {}", title, notification.description)
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field_label(field), message))
        .collect::<Vec<_>>()
        .join("\n")
}
