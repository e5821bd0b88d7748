use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaceholderKind {
    Loading,
    Empty,
}

/// Shown instead of the quote card before mount and for an empty collection
pub(crate) struct PlaceholderView {
    kind: PlaceholderKind,
}

impl PlaceholderView {
    pub fn new(kind: PlaceholderKind) -> Self {
        Self { kind }
    }
}

impl Widget for PlaceholderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.kind {
            PlaceholderKind::Loading => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Загрузка мудрости...",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )),
            ],
            PlaceholderKind::Empty => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "В коллекции пока нет цитат",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Нажмите "),
                    Span::styled("[a]", Style::default().fg(Color::Yellow)),
                    Span::raw(", чтобы добавить первую"),
                ]),
            ],
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
