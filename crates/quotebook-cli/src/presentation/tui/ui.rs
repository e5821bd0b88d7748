use quotebook_runtime::Mode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::AppState;
use super::components::{
    PlaceholderKind, PlaceholderView, QuoteCardView, QuoteFormView, StatusBarView, ToastView,
};
use crate::presentation::view_models::QuoteViewModel;

pub(crate) const TITLE: &str = "Мудрые слова";
pub(crate) const SUBTITLE: &str = "Коллекция вдохновляющих цитат для размышления и мотивации";

pub(crate) fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
    ])
    .split(f.area());

    render_header(f, chunks[0]);
    render_body(f, chunks[1], app);

    let count = (!app.controller.is_loading()).then(|| app.controller.collection_len());
    f.render_widget(StatusBarView::new(app.controller.mode(), count), chunks[2]);

    for (index, toast) in app.toasts.iter().enumerate() {
        match ToastView::area(f.area(), index) {
            Some(area) => f.render_widget(ToastView::new(&toast.notification), area),
            None => break,
        }
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &AppState) {
    let controller = &app.controller;

    if controller.mode() == Mode::Composing
        && let Some(form) = &app.form
    {
        f.render_widget(QuoteFormView::new(form), area);
        return;
    }

    if controller.is_loading() {
        f.render_widget(PlaceholderView::new(PlaceholderKind::Loading), area);
        return;
    }

    match controller.current() {
        Some(quote) => {
            let model = QuoteViewModel::from(quote);
            f.render_widget(
                QuoteCardView::new(&model)
                    .fading(app.is_fading())
                    .show_delete(true),
                area,
            );
        }
        None => f.render_widget(PlaceholderView::new(PlaceholderKind::Empty), area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotebook_runtime::PageController;
    use quotebook_store::{
        DEFAULT_STORAGE_KEY, KeyValueStore, MemoryStore, QuoteStorage, Result, ScriptedRandom,
    };
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    /// Memory store that counts reads
    struct CountingStore {
        inner: MemoryStore,
        reads: Rc<Cell<usize>>,
    }

    impl KeyValueStore for CountingStore {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<()> {
            self.inner.remove_item(key)
        }
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(app: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn app(store: MemoryStore) -> AppState {
        let storage = QuoteStorage::new(store).with_random(ScriptedRandom::new(vec![0]));
        AppState::new(PageController::new(storage), Duration::ZERO)
    }

    #[test]
    fn test_loading_before_mount() {
        let screen = render(&app(MemoryStore::new()));
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Загрузка мудрости..."));
    }

    #[test]
    fn test_frames_before_mount_leave_storage_alone() {
        let reads = Rc::new(Cell::new(0));
        let store = CountingStore {
            inner: MemoryStore::with_item(DEFAULT_STORAGE_KEY, "{not json"),
            reads: Rc::clone(&reads),
        };
        let controller = PageController::new(QuoteStorage::new(store));
        let mut app = AppState::new(controller, Duration::ZERO);

        for _ in 0..10 {
            let screen = render(&app);
            assert!(screen.contains("Цитат: …"));
        }
        assert_eq!(reads.get(), 0);

        app.mount(Instant::now());
        let after_mount = reads.get();
        assert!(after_mount > 0);

        for _ in 0..10 {
            render(&app);
        }
        assert_eq!(reads.get(), after_mount);
    }

    #[test]
    fn test_loading_frame_does_not_seed() {
        let app = app(MemoryStore::new());
        render(&app);

        let store = app.controller.storage().store();
        assert_eq!(store.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_card_shows_author_and_actions() {
        let mut app = app(MemoryStore::new());
        app.mount(Instant::now());

        let screen = render(&app);
        assert!(screen.contains("— Иммануил Кант"));
        assert!(screen.contains("Критика практического разума"));
        assert!(screen.contains("Новая цитата"));
        assert!(screen.contains("Удалить"));
        assert!(screen.contains("Цитат: 7"));
    }

    #[test]
    fn test_empty_collection_shows_empty_state() {
        let mut app = app(MemoryStore::with_item("quotes_collection", "[]"));
        app.mount(Instant::now());

        let screen = render(&app);
        assert!(screen.contains("В коллекции пока нет цитат"));
        assert!(!screen.contains("Загрузка"));
    }

    #[test]
    fn test_form_and_toast_render() {
        let mut app = app(MemoryStore::new());
        let now = Instant::now();
        app.mount(now);
        app.controller.delete_current();
        app.on_tick(now);
        app.controller.open_composer();
        app.form = Some(Default::default());

        let screen = render(&app);
        assert!(screen.contains("Добавить цитату"));
        assert!(screen.contains("Сохранить цитату"));
        assert!(screen.contains("Цитата удалена"));
    }
}
