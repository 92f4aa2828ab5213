//! Command implementations for focusdo.
//!
//! This module contains the implementation of all CLI commands.

use std::str::FromStr;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{AddArgs, Cli, ListArgs, OutputFormat};
use crate::core::datetime::parse_due;
use crate::core::task::{Category, Priority, Task, TaskDraft};
use crate::core::traits::TaskRepository;
use crate::error::FocusdoError;
use crate::output::{format_task, format_tasks, to_json};
use crate::storage::TaskStore;

/// Execute add command
///
/// # Errors
///
/// Returns an error if an argument cannot be parsed or the insert fails.
pub fn add(store: &TaskStore, args: AddArgs, format: OutputFormat) -> Result<String, FocusdoError> {
    let mut draft = TaskDraft::new(args.title);
    draft.note = args.note;
    draft.priority = Priority::parse(&args.priority)?;
    draft.category = Category::parse(&args.category)?;
    draft.estimate_min = args.estimate;

    if let Some(due) = &args.due {
        draft.due = Some(
            parse_due(due).ok_or_else(|| {
                FocusdoError::Parse(format!("Could not parse due date: {due}"))
            })?,
        );
    }

    let task = store.insert(draft)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => Ok(format!("Created task: {} (ID: {})", task.title, task.id)),
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the store query or output formatting fails.
pub fn list(store: &TaskStore, args: ListArgs, format: OutputFormat) -> Result<String, FocusdoError> {
    let category = args.category.as_deref().map(Category::parse).transpose()?;
    let tasks: Vec<Task> = store
        .all()?
        .into_iter()
        .filter(|t| args.all || !t.done)
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect();

    let title = match category {
        Some(c) => title_for(c),
        None => "Tasks",
    };
    format_tasks(&tasks, title, format)
}

/// Execute day command
///
/// # Errors
///
/// Returns an error if the store query or output formatting fails.
pub fn day(store: &TaskStore, all: bool, format: OutputFormat) -> Result<String, FocusdoError> {
    let tasks: Vec<Task> = store
        .all()?
        .into_iter()
        .filter(|t| t.category == Category::Day && (all || !t.done))
        .collect();

    format_tasks(&tasks, "Today", format)
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if the task does not exist or formatting fails.
pub fn show(store: &TaskStore, id: i64, format: OutputFormat) -> Result<String, FocusdoError> {
    let task = store
        .get(id)?
        .ok_or_else(|| FocusdoError::NotFound(format!("No task with id {id}")))?;
    format_task(&task, format)
}

/// Execute done command
///
/// Toggles the task: open tasks become done, done tasks re-open.
///
/// # Errors
///
/// Returns an error if the task does not exist or the update fails.
pub fn done(store: &TaskStore, id: i64, format: OutputFormat) -> Result<String, FocusdoError> {
    let task = store
        .get(id)?
        .ok_or_else(|| FocusdoError::NotFound(format!("No task with id {id}")))?;
    let toggled = task.toggled();
    store.update(&toggled)?;

    match format {
        OutputFormat::Json => to_json(&toggled),
        OutputFormat::Pretty => {
            let verb = if toggled.done { "Completed" } else { "Reopened" };
            Ok(format!("{verb} task: {} (ID: {id})", toggled.title))
        }
    }
}

/// Execute delete command
///
/// # Errors
///
/// Returns an error if the task does not exist or the delete fails.
pub fn delete(store: &TaskStore, id: i64, format: OutputFormat) -> Result<String, FocusdoError> {
    let task = store
        .get(id)?
        .ok_or_else(|| FocusdoError::NotFound(format!("No task with id {id}")))?;
    store.delete(&task)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => Ok(format!("Deleted task: {} (ID: {id})", task.title)),
    }
}

/// Generate shell completions to stdout
///
/// # Errors
///
/// Returns an error if the shell name is not recognized.
pub fn completions(shell: &str) -> Result<(), FocusdoError> {
    let shell = Shell::from_str(shell)
        .map_err(|_| FocusdoError::Parse(format!("Unknown shell: {shell}")))?;

    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "focusdo", &mut std::io::stdout());
    Ok(())
}

const fn title_for(category: Category) -> &'static str {
    match category {
        Category::Day => "Today",
        Category::Week => "This Week",
        Category::Later => "Later",
    }
}
