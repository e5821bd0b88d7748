use quotebook_types::{DraftField, QuoteDraft, ValidationErrors, push_unique_tag};

/// Which part of the form receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Text,
    Author,
    Source,
    TagInput,
    TagList,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Text,
        FormFocus::Author,
        FormFocus::Source,
        FormFocus::TagInput,
        FormFocus::TagList,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn field(self) -> Option<DraftField> {
        match self {
            FormFocus::Text => Some(DraftField::Text),
            FormFocus::Author => Some(DraftField::Author),
            FormFocus::Source => Some(DraftField::Source),
            FormFocus::TagInput | FormFocus::TagList => None,
        }
    }
}

/// Local state of the quote creation form
///
/// The form never clears itself after a successful submit; whoever owns it
/// decides when to drop it.
#[derive(Debug, Clone)]
pub struct QuoteForm {
    text: String,
    author: String,
    source: String,
    tags: Vec<String>,
    tag_input: String,
    errors: ValidationErrors,
    focus: FormFocus,
    selected_tag: usize,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteForm {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            author: String::new(),
            source: String::new(),
            tags: Vec::new(),
            tag_input: String::new(),
            errors: ValidationErrors::new(),
            focus: FormFocus::Text,
            selected_tag: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.tags.get(self.selected_tag).map(String::as_str)
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Replace a field's value. Editing a field clears its error.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Text => self.text = value,
            DraftField::Author => self.author = value,
            DraftField::Source => self.source = value,
            DraftField::Tags => {
                self.tag_input = value;
                return;
            }
        }
        self.errors.remove(field);
    }

    pub fn set_tag_input(&mut self, value: impl Into<String>) {
        self.tag_input = value.into();
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Text => Some(&mut self.text),
            FormFocus::Author => Some(&mut self.author),
            FormFocus::Source => Some(&mut self.source),
            FormFocus::TagInput => Some(&mut self.tag_input),
            FormFocus::TagList => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.push(c);
            if let Some(field) = self.focus.field() {
                self.errors.remove(field);
            }
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(buffer) = self.focused_buffer() {
            buffer.pop();
            if let Some(field) = self.focus.field() {
                self.errors.remove(field);
            }
        }
    }

    /// Add the current tag input. Blank input and duplicates are ignored;
    /// the input is cleared only when a tag was added.
    pub fn add_tag(&mut self) -> bool {
        if push_unique_tag(&mut self.tags, &self.tag_input).is_some() {
            self.tag_input.clear();
            true
        } else {
            false
        }
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        if self.selected_tag >= self.tags.len() {
            self.selected_tag = self.tags.len().saturating_sub(1);
        }
        self.tags.len() < before
    }

    pub fn remove_selected_tag(&mut self) -> bool {
        match self.selected_tag().map(str::to_string) {
            Some(tag) => self.remove_tag(&tag),
            None => false,
        }
    }

    pub fn select_next_tag(&mut self) {
        if !self.tags.is_empty() {
            self.selected_tag = (self.selected_tag + 1) % self.tags.len();
        }
    }

    pub fn select_previous_tag(&mut self) {
        if !self.tags.is_empty() {
            self.selected_tag = (self.selected_tag + self.tags.len() - 1) % self.tags.len();
        }
    }

    pub fn draft(&self) -> QuoteDraft {
        QuoteDraft {
            text: self.text.clone(),
            author: self.author.clone(),
            source: Some(self.source.clone()),
            tags: Some(self.tags.clone()),
        }
    }

    /// Validate and hand back the complete draft. On failure the per-field
    /// errors are stored and nothing is returned.
    pub fn submit(&mut self) -> Option<QuoteDraft> {
        let draft = self.draft();
        match draft.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::new();
                Some(draft)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
