use quotebook_runtime::Mode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub(crate) struct StatusBarView {
    mode: Mode,
    /// `None` while loading
    count: Option<usize>,
}

impl StatusBarView {
    pub fn new(mode: Mode, count: Option<usize>) -> Self {
        Self { mode, count }
    }
}

fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(label),
    ]
}

impl Widget for StatusBarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(inner);

        let count = match self.count {
            Some(count) => format!("Цитат: {}", count),
            None => "Цитат: …".to_string(),
        };
        Paragraph::new(Line::from(count)).render(chunks[0], buf);

        let hints = match self.mode {
            Mode::Viewing => vec![
                hint("[n]", " новая  "),
                hint("[a]", " добавить  "),
                hint("[d]", " удалить  "),
                hint("[q]", " выход"),
            ],
            Mode::Composing => vec![
                hint("[Tab]", " поле  "),
                hint("[Enter]", " тег  "),
                hint("[Ctrl+S]", " сохранить  "),
                hint("[Esc]", " отмена"),
            ],
        };
        let spans: Vec<Span> = hints.into_iter().flatten().collect();
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
