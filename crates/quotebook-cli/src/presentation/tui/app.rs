use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quotebook_runtime::{Mode, PageController};

use crate::presentation::form::{FormFocus, QuoteForm};
use crate::presentation::view_models::NotificationViewModel;

pub(crate) const TOAST_TTL: Duration = Duration::from_secs(3);

pub(crate) struct Toast {
    pub notification: NotificationViewModel,
    pub shown_at: Instant,
}

pub(crate) struct AppState {
    pub controller: PageController,
    /// Present exactly while the controller is composing
    pub form: Option<QuoteForm>,
    pub toasts: VecDeque<Toast>,
    /// Start of the card exit transition that precedes "new quote"
    pub transition_started: Option<Instant>,
    pub transition: Duration,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(controller: PageController, transition: Duration) -> Self {
        Self {
            controller,
            form: None,
            toasts: VecDeque::new(),
            transition_started: None,
            transition,
            should_quit: false,
        }
    }

    pub fn mount(&mut self, now: Instant) {
        self.controller.mount();
        self.collect_notifications(now);
    }

    pub fn is_fading(&self) -> bool {
        self.transition_started.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.controller.mode() {
            Mode::Viewing => self.handle_viewing_key(key, now),
            Mode::Composing => self.handle_composing_key(key, now),
        }
        self.collect_notifications(now);
    }

    fn handle_viewing_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Right => {
                self.request_next_quote(now)
            }
            KeyCode::Char('a') => {
                self.transition_started = None;
                self.controller.open_composer();
                self.form = Some(QuoteForm::new());
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if !self.is_fading() {
                    self.controller.delete_current();
                }
            }
            _ => {}
        }
    }

    fn handle_composing_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(form) = self.form.as_mut() else {
            self.controller.cancel_composer();
            return;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.submit_form(now);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.form = None;
                self.controller.cancel_composer();
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_previous(),
            KeyCode::Enter => match form.focus() {
                FormFocus::TagInput => {
                    form.add_tag();
                }
                FormFocus::TagList => {}
                _ => form.focus_next(),
            },
            KeyCode::Left if form.focus() == FormFocus::TagList => form.select_previous_tag(),
            KeyCode::Right if form.focus() == FormFocus::TagList => form.select_next_tag(),
            KeyCode::Backspace | KeyCode::Delete if form.focus() == FormFocus::TagList => {
                form.remove_selected_tag();
            }
            KeyCode::Backspace => form.delete_char(),
            KeyCode::Char(c) => form.insert_char(c),
            _ => {}
        }
    }

    fn submit_form(&mut self, now: Instant) {
        let Some(draft) = self.form.as_mut().and_then(QuoteForm::submit) else {
            return;
        };

        match self.controller.add_quote(draft) {
            Ok(_) => {
                self.form = None;
                self.collect_notifications(now);
            }
            Err(errors) => {
                tracing::warn!(errors = %errors, "controller rejected a draft the form accepted");
            }
        }
    }

    /// Start the exit transition; the quote changes when it completes.
    pub fn request_next_quote(&mut self, now: Instant) {
        if self.transition.is_zero() {
            self.controller.next_quote();
        } else if self.transition_started.is_none() {
            self.transition_started = Some(now);
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(started) = self.transition_started
            && now.duration_since(started) >= self.transition
        {
            self.transition_started = None;
            self.controller.next_quote();
        }

        self.collect_notifications(now);
        self.toasts
            .retain(|toast| now.duration_since(toast.shown_at) < TOAST_TTL);
    }

    fn collect_notifications(&mut self, now: Instant) {
        for notification in self.controller.take_notifications() {
            self.toasts.push_back(Toast {
                notification: NotificationViewModel::from(&notification),
                shown_at: now,
            });
        }
    }
}
