use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::NotificationViewModel;

/// Transient confirmation drawn over the top-right corner
pub(crate) struct ToastView<'a> {
    model: &'a NotificationViewModel,
}

impl<'a> ToastView<'a> {
    pub fn new(model: &'a NotificationViewModel) -> Self {
        Self { model }
    }

    pub const HEIGHT: u16 = 4;
    pub const WIDTH: u16 = 48;

    /// Slot `index` stacked downward from the top-right of `area`
    pub fn area(area: Rect, index: usize) -> Option<Rect> {
        let width = Self::WIDTH.min(area.width);
        let offset = u16::try_from(index).ok()?.checked_mul(Self::HEIGHT)?;
        let y = area.y.checked_add(1)?.checked_add(offset)?;
        if y.checked_add(Self::HEIGHT)? > area.bottom() {
            return None;
        }
        Some(Rect {
            x: area.right() - width,
            y,
            width,
            height: Self::HEIGHT,
        })
    }
}

impl<'a> Widget for ToastView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!("✓ {}", self.model.title),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(self.model.description.as_str()),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(area, buf);
    }
}
