use anyhow::Result;
use is_terminal::IsTerminal;
use quotebook_types::ValidationErrors;
use serde_json::json;

use super::formatters::{
    format_notification, format_quote, format_quote_row, format_validation_errors,
};
use super::view_models::{NotificationViewModel, QuoteViewModel};
use crate::OutputFormat;

pub trait QuoteView {
    fn render_quote(&self, quote: Option<&QuoteViewModel>) -> Result<()>;
    fn render_quote_list(&self, quotes: &[QuoteViewModel]) -> Result<()>;
    fn render_quote_added(
        &self,
        quote: &QuoteViewModel,
        notifications: &[NotificationViewModel],
    ) -> Result<()>;
    fn render_quote_deleted(
        &self,
        id: &str,
        deleted: bool,
        notifications: &[NotificationViewModel],
    ) -> Result<()>;
    fn render_cleared(&self) -> Result<()>;
    fn render_validation_errors(&self, errors: &ValidationErrors) -> Result<()>;
}

pub struct ConsoleView {
    format: OutputFormat,
    color: bool,
}

impl ConsoleView {
    pub fn new(format: OutputFormat) -> Self {
        let color = format == OutputFormat::Plain && std::io::stdout().is_terminal();
        Self { format, color }
    }

    fn print_json(&self, value: &serde_json::Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    fn print_notifications(&self, notifications: &[NotificationViewModel]) {
        for notification in notifications {
            println!("{}", format_notification(notification, self.color));
        }
    }
}

impl QuoteView for ConsoleView {
    fn render_quote(&self, quote: Option<&QuoteViewModel>) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(&json!(quote)),
            OutputFormat::Plain => {
                match quote {
                    Some(quote) => println!("{}", format_quote(quote, self.color)),
                    None => println!("Коллекция пуста. Добавьте цитату: quotebook add --text ... --author ..."),
                }
                Ok(())
            }
        }
    }

    fn render_quote_list(&self, quotes: &[QuoteViewModel]) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(&json!(quotes)),
            OutputFormat::Plain => {
                if quotes.is_empty() {
                    println!("Коллекция пуста.");
                    return Ok(());
                }

                println!("{:<38} {:<24} TEXT", "ID", "AUTHOR");
                println!("{}", "-".repeat(100));
                for quote in quotes {
                    println!("{}", format_quote_row(quote));
                }
                println!("\nВсего цитат: {}", quotes.len());
                Ok(())
            }
        }
    }

    fn render_quote_added(
        &self,
        quote: &QuoteViewModel,
        notifications: &[NotificationViewModel],
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(&json!({
                "quote": quote,
                "notifications": notifications,
            })),
            OutputFormat::Plain => {
                self.print_notifications(notifications);
                println!("{}", format_quote(quote, self.color));
                println!("ID: {}", quote.id);
                Ok(())
            }
        }
    }

    fn render_quote_deleted(
        &self,
        id: &str,
        deleted: bool,
        notifications: &[NotificationViewModel],
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(&json!({
                "id": id,
                "deleted": deleted,
                "notifications": notifications,
            })),
            OutputFormat::Plain => {
                if deleted {
                    self.print_notifications(notifications);
                } else {
                    println!("Цитата {} не найдена", id);
                }
                Ok(())
            }
        }
    }

    fn render_cleared(&self) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(&json!({ "cleared": true })),
            OutputFormat::Plain => {
                println!("Коллекция удалена. Цитаты по умолчанию появятся при следующем запуске.");
                Ok(())
            }
        }
    }

    fn render_validation_errors(&self, errors: &ValidationErrors) -> Result<()> {
        match self.format {
            OutputFormat::Json => self.print_json(&json!({ "errors": errors })),
            OutputFormat::Plain => {
                eprintln!("Цитата не сохранена:");
                eprintln!("{}", format_validation_errors(errors));
                Ok(())
            }
        }
    }
}
