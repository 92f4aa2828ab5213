//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::FocusdoError;
use crate::tui::app::{App, View};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle/complete the selected task.
    Toggle,
    /// Delete the selected task.
    Delete,
    /// Start a focus session.
    StartFocus,
    /// End the focus session and return to the list.
    EndFocus,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, FocusdoError> {
    // Poll with a small timeout so the session clock keeps redrawing
    if event::poll(Duration::from_millis(100))
        .map_err(|e| FocusdoError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| FocusdoError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                // In a session, quit keys end the session instead of the app
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.cancel_pending();
                    return Ok(Some(match app.view {
                        View::Focus => Action::EndFocus,
                        View::Inbox => Action::Quit,
                    }));
                }

                // Navigation - vim style
                KeyCode::Char('j') | KeyCode::Down => {
                    app.cancel_pending();
                    app.select_next();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    app.cancel_pending();
                    app.select_previous();
                }

                // Jump to top/bottom
                KeyCode::Char('g') => {
                    app.handle_g();
                }
                KeyCode::Char('G') => {
                    app.cancel_pending();
                    app.select_last();
                }
                KeyCode::Home => {
                    app.cancel_pending();
                    app.select_first();
                }
                KeyCode::End => {
                    app.cancel_pending();
                    app.select_last();
                }

                // Actions
                KeyCode::Enter | KeyCode::Char(' ') => {
                    app.cancel_pending();
                    return Ok(Some(Action::Toggle));
                }
                KeyCode::Char('d') => {
                    app.cancel_pending();
                    return Ok(Some(Action::Delete));
                }
                KeyCode::Char('f') => {
                    if app.view == View::Inbox {
                        app.cancel_pending();
                        return Ok(Some(Action::StartFocus));
                    }
                }
                KeyCode::Char('c') => {
                    if app.view == View::Inbox {
                        app.cancel_pending();
                        app.cycle_filter();
                    }
                }

                // Help
                KeyCode::Char('?') => {
                    app.cancel_pending();
                    app.status = Some(match app.view {
                        View::Inbox => {
                            "j/k:nav | Enter:toggle | d:delete | c:filter | f:focus | q:quit"
                                .to_string()
                        }
                        View::Focus => "j/k:nav | Enter:done | q:end session".to_string(),
                    });
                }

                _ => {
                    app.cancel_pending();
                }
            }
        }
    }

    Ok(None)
}
