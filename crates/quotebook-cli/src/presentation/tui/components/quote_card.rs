use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::QuoteViewModel;

/// Card showing a single quote with its actions
pub(crate) struct QuoteCardView<'a> {
    model: &'a QuoteViewModel,
    fading: bool,
    show_delete: bool,
}

impl<'a> QuoteCardView<'a> {
    pub fn new(model: &'a QuoteViewModel) -> Self {
        Self {
            model,
            fading: false,
            show_delete: false,
        }
    }

    /// Render dimmed while the card is on its way out
    pub fn fading(mut self, fading: bool) -> Self {
        self.fading = fading;
        self
    }

    /// Offer the delete action; without it only "new quote" is shown
    pub fn show_delete(mut self, show_delete: bool) -> Self {
        self.show_delete = show_delete;
        self
    }

    fn base_style(&self) -> Style {
        if self.fading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        }
    }

    fn body(&self) -> Vec<Line<'a>> {
        let base = self.base_style();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("«{}»", self.model.text),
                base.add_modifier(Modifier::BOLD | Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("— {}", self.model.author),
                if self.fading { base } else { base.fg(Color::Cyan) },
            )),
        ];

        if let Some(source) = &self.model.source {
            lines.push(Line::from(Span::styled(
                source.clone(),
                base.fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )));
        }

        if !self.model.tags.is_empty() {
            lines.push(Line::from(""));
            let mut chips = Vec::new();
            for tag in &self.model.tags {
                chips.push(Span::styled(
                    format!(" #{} ", tag),
                    if self.fading {
                        base
                    } else {
                        Style::default().fg(Color::Black).bg(Color::Gray)
                    },
                ));
                chips.push(Span::raw(" "));
            }
            lines.push(Line::from(chips));
        }

        lines
    }

    fn actions(&self) -> Line<'a> {
        let key = Style::default().fg(Color::Yellow);
        let mut spans = vec![Span::styled("[n]", key), Span::raw(" Новая цитата")];
        if self.show_delete {
            spans.push(Span::raw("   "));
            spans.push(Span::styled("[d]", Style::default().fg(Color::Red)));
            spans.push(Span::raw(" Удалить"));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for QuoteCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.base_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        Paragraph::new(self.body())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Paragraph::new(self.actions())
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}
