//! Full-screen viewer: one quote at a time, with an add form and toasts

mod app;
mod components;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quotebook_runtime::PageController;
use ratatui::{Terminal, backend::CrosstermBackend};

use app::AppState;

const TICK_RATE: Duration = Duration::from_millis(250);
const FRAME_RATE: Duration = Duration::from_millis(40);

pub struct QuoteTui {
    controller: PageController,
    transition: Duration,
}

impl QuoteTui {
    pub fn new(controller: PageController, transition_ms: u64) -> Self {
        Self {
            controller,
            transition: Duration::from_millis(transition_ms),
        }
    }

    pub fn run(self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut app = AppState::new(self.controller, self.transition);
        // Draw the loading state once before touching storage
        terminal.draw(|f| ui::draw(f, &app))?;
        app.mount(Instant::now());

        let result = event_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll faster while the card is fading so the swap lands on time
        let rate = if app.is_fading() { FRAME_RATE } else { TICK_RATE };
        let timeout = rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if last_tick.elapsed() >= rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }

    Ok(())
}
