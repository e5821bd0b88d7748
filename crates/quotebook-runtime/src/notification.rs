#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    QuoteAdded,
    QuoteDeleted,
}

/// User-facing confirmation, shown as a toast by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn quote_added() -> Self {
        Self {
            kind: NotificationKind::QuoteAdded,
            title: "Цитата добавлена",
            description: "Ваша цитата успешно добавлена в коллекцию",
        }
    }

    pub fn quote_deleted() -> Self {
        Self {
            kind: NotificationKind::QuoteDeleted,
            title: "Цитата удалена",
            description: "Цитата была удалена из коллекции",
        }
    }
}
