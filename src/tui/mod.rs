//! Terminal User Interface (TUI) for focusdo.
//!
//! Provides an interactive terminal interface for managing tasks and
//! running focus sessions. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, View};

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::FocusdoError;
use crate::storage::TaskStore;

/// Run the TUI application.
///
/// When `focus_immediately` is set, a focus session starts as soon as
/// the screen is up (the `focus` command).
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(store: &TaskStore, target_minutes: u32, focus_immediately: bool) -> Result<(), FocusdoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| FocusdoError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| FocusdoError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusdoError::Config(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(store, target_minutes);
    if focus_immediately {
        app.start_focus();
    }
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), FocusdoError> {
    loop {
        // Consume session ticks and pick up store changes
        app.tick();

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusdoError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle_selected()?,
                event::Action::Delete => app.delete_selected()?,
                event::Action::StartFocus => app.start_focus(),
                event::Action::EndFocus => app.end_focus(),
            }
        }
    }

    app.end_focus();
    Ok(())
}
