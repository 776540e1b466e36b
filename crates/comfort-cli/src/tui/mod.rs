//! Interactive terminal view for the Comfort widget.
//!
//! Blocking crossterm event loop with a 100 ms poll timeout. Every key press
//! is mapped to an [`input::Action`] and applied to the [`App`], whose widget
//! re-renders and persists as needed.

pub mod app;
pub mod input;
pub mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use comfort_core::{Clock, Widget};
use comfort_store::KeyValueStore;

use crate::config::Config;
pub use app::{App, Focus};

/// Set up the terminal for TUI rendering.
///
/// Enables raw mode and switches to the alternate screen buffer.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI over `widget` until the user quits.
pub fn run<S: KeyValueStore, C: Clock>(widget: Widget<S, C>, config: &Config) -> Result<()> {
    let mut app = App::new(widget, config);
    info!("Starting terminal view");

    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app);
    restore_terminal()?;

    result
}

/// Main event loop for the TUI.
fn run_event_loop<S: KeyValueStore, C: Clock>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S, C>,
) -> Result<()> {
    while !app.should_quit() {
        app.clean_expired_messages();

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let action = input::handle_key(key.code, app.editing_text(), app.pending_reset);
            input::apply_action(app, action);
        }
    }

    Ok(())
}
