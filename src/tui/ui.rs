//! UI rendering for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::datetime::format_local;
use crate::core::task::Priority;
use crate::focus::format_elapsed_hms;
use crate::tui::app::{App, View};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    match app.view {
        View::Inbox => render_inbox(frame, app),
        View::Focus => render_focus(frame, app),
    }
}

/// Render the task list view: header, list, status bar.
fn render_inbox(frame: &mut Frame<'_>, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the focus session view: clock, progress, remaining tasks.
fn render_focus(frame: &mut Frame<'_>, app: &App<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Clock
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),    // Remaining tasks
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_clock(frame, app, chunks[0]);
    render_progress(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let scope = app.filter.map_or("Tasks", |c| c.as_str());
    let title = format!(" {} ({} items) ", scope, app.items.len());

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the session clock. Turns red once the target length is passed.
fn render_clock(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let title = format!(
        " {}  (target {} min) ",
        format_elapsed_hms(app.elapsed_secs()),
        app.target_minutes
    );

    let color = if app.elapsed_secs() >= u64::from(app.target_minutes) * 60 {
        Color::Red
    } else {
        Color::Green
    };

    let clock = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Focus ")
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(clock, area);
}

/// Render the completion progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (app.progress() * 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent.min(100));

    frame.render_widget(gauge, area);
}

/// Render the task list.
fn render_list(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .items
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let status_icon = if task.done { "[x]" } else { "[ ]" };

            let title_color = match task.priority {
                Priority::VeryHigh => Color::Red,
                Priority::High => Color::Yellow,
                Priority::Normal => Color::White,
                Priority::Low => Color::DarkGray,
            };

            let mut spans = vec![
                Span::styled(
                    format!("{status_icon} "),
                    Style::default().fg(if task.done { Color::Green } else { Color::White }),
                ),
                Span::styled(
                    &task.title,
                    Style::default().fg(title_color).add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
            ];

            if let Some(estimate) = task.estimate_min {
                spans.push(Span::styled(
                    format!("  ~{estimate}m"),
                    Style::default().fg(Color::Blue),
                ));
            }

            if let Some(due) = task.due {
                spans.push(Span::styled(
                    format!("  {}", format_local(due)),
                    Style::default().fg(Color::Yellow),
                ));
            }

            spans.push(Span::styled(
                format!("  [{}]", task.category.as_str()),
                Style::default().fg(Color::DarkGray),
            ));

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let fallback = match app.view {
        View::Inbox => "j/k:nav | Enter:toggle | d:delete | c:filter | f:focus | ?:help | q:quit",
        View::Focus => "j/k:nav | Enter:done | q:end session",
    };
    let status_text = app.status.as_deref().unwrap_or(fallback);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
