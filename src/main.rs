//! Terminal lifecycle, event loop, and cleanup for SyntaxScope.

mod actions;
mod app;
mod clipboard;
mod events;
mod filter;
mod search;
mod state;
mod store;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use app::App;
use clipboard::{ClipboardWriter, NullClipboard, SystemClipboard};
use events::{key_to_action, TICK_RATE};
use store::RecordStore;

const DEFAULT_DATA_PATH: &str = "data/commands.json";

fn main() -> Result<()> {
    // Initialise structured logging (RUST_LOG controls the filter).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("syntaxscope=info".parse()?),
        )
        .with_target(false)
        .init();

    let data_path = std::env::var("SYNTAXSCOPE_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));
    let store = RecordStore::load(&data_path);

    let clipboard: Box<dyn ClipboardWriter> = match SystemClipboard::new() {
        Ok(c) => Box::new(c),
        Err(e) => {
            warn!("system clipboard unavailable, copy disabled: {e}");
            Box::new(NullClipboard)
        }
    };

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(store, clipboard);

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                let action = key_to_action(
                    &key,
                    !app.state.search_query().is_empty(),
                    app.state.query.active_category.is_some(),
                );
                if let Some(a) = action {
                    app.dispatch(a);
                    if app.should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
