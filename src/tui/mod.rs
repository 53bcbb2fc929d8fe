//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, AppEvent, Focus};
pub use input::{key_event, mouse_event, move_cursor};
pub use ui::{Areas, draw, history_offset, layout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned.
pub fn run_tui(mut app: App) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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

    info!(
        moves = app.history().len() - 1,
        status = %app.history().status(),
        "TUI closed"
    );
    res
}

/// Draw, wait for one input, apply it, repeat.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let area = terminal.draw(|f| ui::draw(f, app))?.area;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let next = match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => input::key_event(key, app),
            Event::Mouse(mouse) => input::mouse_event(mouse, area, app),
            other => {
                debug!(?other, "Ignoring terminal event");
                None
            }
        };

        if let Some(event) = next {
            app.handle(event);
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}
