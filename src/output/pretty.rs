use colored::Colorize;

use crate::core::datetime::format_local;
use crate::core::task::{Priority, Task};

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[Task], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = if task.done {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let title_text = match task.priority {
            Priority::VeryHigh => task.title.red().bold(),
            Priority::High => task.title.yellow().bold(),
            Priority::Normal => task.title.normal().bold(),
            Priority::Low => task.title.dimmed(),
        };

        let mut line = format!("{} {} {}", status_icon, format!("#{}", task.id).dimmed(), title_text);

        if let Some(due) = &task.due {
            line.push_str(&format!("  {}", format_local(*due).yellow()));
        }

        if let Some(estimate) = task.estimate_min {
            line.push_str(&format!("  {}", format!("~{estimate}m").cyan()));
        }

        line.push_str(&format!("  {}", task.category.as_str().dimmed()));

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
pub fn format_task_pretty(task: &Task) -> String {
    let status_icon = if task.done {
        "[x]".green()
    } else {
        "[ ]".white()
    };

    let mut output = format!("{} {}\n", status_icon, task.title.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!(
        "  {}: {}\n",
        "Priority".dimmed(),
        task.priority.as_str()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Category".dimmed(),
        task.category.as_str()
    ));

    if let Some(note) = &task.note {
        output.push_str(&format!("  {}: {}\n", "Note".dimmed(), note));
    }

    if let Some(estimate) = task.estimate_min {
        output.push_str(&format!("  {}: {} min\n", "Estimate".dimmed(), estimate));
    }

    if let Some(due) = &task.due {
        output.push_str(&format!("  {}: {}\n", "Due".dimmed(), format_local(*due)));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        format_local(task.created_at)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::Category;
    use chrono::Utc;

    fn make_task(title: &str, done: bool) -> Task {
        Task {
            id: 7,
            title: title.to_string(),
            note: None,
            done,
            priority: Priority::Normal,
            estimate_min: None,
            due: None,
            category: Category::Day,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_tasks_pretty_empty_list() {
        let tasks: Vec<Task> = vec![];
        let output = format_tasks_pretty(&tasks, "Today");

        assert!(output.contains("Today (0 items)"));
        assert!(output.contains("No items"));
    }

    #[test]
    fn test_format_tasks_pretty_open_task() {
        let tasks = vec![make_task("Buy groceries", false)];
        let output = format_tasks_pretty(&tasks, "Inbox");

        assert!(output.contains("Inbox (1 items)"));
        assert!(output.contains("[ ]"));
        assert!(output.contains("Buy groceries"));
        assert!(output.contains("#7"));
    }

    #[test]
    fn test_format_tasks_pretty_done_task() {
        let tasks = vec![make_task("Finished task", true)];
        let output = format_tasks_pretty(&tasks, "Today");

        assert!(output.contains("[x]"));
        assert!(output.contains("Finished task"));
    }

    #[test]
    fn test_format_tasks_pretty_with_estimate() {
        let mut task = make_task("Sized task", false);
        task.estimate_min = Some(30);
        let output = format_tasks_pretty(&[task], "Today");

        assert!(output.contains("~30m"));
    }

    #[test]
    fn test_format_tasks_pretty_with_due_date() {
        let mut task = make_task("Due task", false);
        task.due = Some(Utc::now());
        let output = format_tasks_pretty(&[task], "Today");

        assert!(output.contains("Due task"));
        // dd/mm/yyyy hh:mm rendering of the due date
        assert!(output.contains('/'));
    }

    #[test]
    fn test_format_tasks_pretty_shows_category() {
        let mut task = make_task("Weekly chore", false);
        task.category = Category::Week;
        let output = format_tasks_pretty(&[task], "All");

        assert!(output.contains("week"));
    }

    #[test]
    fn test_format_tasks_pretty_separator_line() {
        let tasks = vec![make_task("Test", false)];
        let output = format_tasks_pretty(&tasks, "Today");

        assert!(output.contains("─"));
    }

    #[test]
    fn test_format_task_pretty_basic() {
        let task = make_task("Simple task", false);
        let output = format_task_pretty(&task);

        assert!(output.contains("[ ]"));
        assert!(output.contains("Simple task"));
        assert!(output.contains("ID: 7"));
        assert!(output.contains("Priority: normal"));
        assert!(output.contains("Category: day"));
        assert!(output.contains("Created:"));
    }

    #[test]
    fn test_format_task_pretty_with_note() {
        let mut task = make_task("Task with note", false);
        task.note = Some("remember the context".to_string());
        let output = format_task_pretty(&task);

        assert!(output.contains("Note: remember the context"));
    }

    #[test]
    fn test_format_task_pretty_note_hidden_when_absent() {
        let task = make_task("Bare task", false);
        let output = format_task_pretty(&task);

        assert!(!output.contains("Note:"));
    }

    #[test]
    fn test_format_task_pretty_with_estimate() {
        let mut task = make_task("Sized task", false);
        task.estimate_min = Some(45);
        let output = format_task_pretty(&task);

        assert!(output.contains("Estimate: 45 min"));
    }

    #[test]
    fn test_format_tasks_pretty_unicode_title() {
        let tasks = vec![make_task("Task with emoji 🚀", false)];
        let output = format_tasks_pretty(&tasks, "Today");

        assert!(output.contains("Task with emoji 🚀"));
    }
}
