//! Output formatting for focusdo.
//!
//! This module provides formatters for displaying tasks in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::task::Task;
use crate::error::FocusdoError;

pub use json::*;
pub use pretty::*;

/// Format a list of tasks based on output format
///
/// # Errors
///
/// Returns `FocusdoError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    format: OutputFormat,
) -> Result<String, FocusdoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `FocusdoError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, format: OutputFormat) -> Result<String, FocusdoError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}
