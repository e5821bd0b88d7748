use quotebook_types::DraftField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::form::{FormFocus, QuoteForm};
use crate::presentation::formatters::field_label;

/// The add-quote form: three text fields, a tag input and the tag chips
pub(crate) struct QuoteFormView<'a> {
    form: &'a QuoteForm,
}

impl<'a> QuoteFormView<'a> {
    pub fn new(form: &'a QuoteForm) -> Self {
        Self { form }
    }

    fn label(&self, field: DraftField, required: bool, focus: FormFocus) -> Line<'a> {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if self.form.focus() == focus {
            style = style.fg(Color::Yellow);
        }
        let suffix = if required { " *" } else { " (необязательно)" };
        Line::from(Span::styled(format!("{}{}", field_label(field), suffix), style))
    }

    fn input(&self, value: &str, focus: FormFocus, placeholder: &'static str) -> Line<'a> {
        let focused = self.form.focus() == focus;
        let marker = if focused { "▸ " } else { "  " };
        if value.is_empty() {
            let cursor = if focused { "▏" } else { "" };
            Line::from(vec![
                Span::raw(marker),
                Span::raw(cursor),
                Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            let cursor = if focused { "▏" } else { "" };
            Line::from(vec![
                Span::raw(marker),
                Span::raw(value.to_string()),
                Span::raw(cursor),
            ])
        }
    }

    fn error(&self, field: DraftField) -> Option<Line<'a>> {
        self.form.errors().get(field).map(|message| {
            Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ))
        })
    }

    fn text_field(
        &self,
        lines: &mut Vec<Line<'a>>,
        field: DraftField,
        focus: FormFocus,
        value: &str,
        placeholder: &'static str,
    ) {
        let required = matches!(field, DraftField::Text | DraftField::Author);
        lines.push(self.label(field, required, focus));
        lines.push(self.input(value, focus, placeholder));
        if let Some(error) = self.error(field) {
            lines.push(error);
        }
        lines.push(Line::from(""));
    }

    fn tag_chips(&self) -> Line<'a> {
        let form = self.form;
        if form.tags().is_empty() {
            return Line::from(Span::styled(
                "  тегов пока нет",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let list_focused = form.focus() == FormFocus::TagList;
        let selected = form.selected_tag();
        let mut spans = vec![Span::raw(if list_focused { "▸ " } else { "  " })];
        for tag in form.tags() {
            let mut style = Style::default().fg(Color::Black).bg(Color::Gray);
            if list_focused && selected == Some(tag.as_str()) {
                style = style.bg(Color::Yellow);
            }
            spans.push(Span::styled(format!(" {} ✕ ", tag), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for QuoteFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = self.form;
        let mut lines = vec![
            Line::from(Span::styled(
                "Поделитесь мудростью, которая вас вдохновляет",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        self.text_field(
            &mut lines,
            DraftField::Text,
            FormFocus::Text,
            form.text(),
            "Введите текст цитаты...",
        );
        self.text_field(
            &mut lines,
            DraftField::Author,
            FormFocus::Author,
            form.author(),
            "Кто автор этой цитаты?",
        );
        self.text_field(
            &mut lines,
            DraftField::Source,
            FormFocus::Source,
            form.source(),
            "Книга, выступление, фильм...",
        );

        lines.push(self.label(DraftField::Tags, false, FormFocus::TagInput));
        lines.push(self.input(form.tag_input(), FormFocus::TagInput, "Добавьте тег и нажмите Enter"));
        lines.push(self.tag_chips());
        lines.push(Line::from(""));

        let key = Style::default().fg(Color::Yellow);
        lines.push(Line::from(vec![
            Span::styled("[Esc]", key),
            Span::raw(" Отмена   "),
            Span::styled("[Ctrl+S]", key),
            Span::raw(" Сохранить цитату"),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Добавить цитату ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .render(area, buf);
    }
}
