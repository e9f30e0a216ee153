//! Interactive terminal session.

use crate::app::App;
use crate::config::Config;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the TUI until the user quits. The terminal is restored on every exit path.
#[instrument(skip_all)]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.board());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.state().history().len(), "TUI closed");

    res
}

/// Event loop: redraw when needed, then block on the next input event.
fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal.draw(|frame| {
                app.set_viewport(frame.area());
                ui::draw(frame, app);
            })?;
        }

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(..) => app.mark_dirty(),
            _ => {}
        }
    }
}
