//! JSON output formatting for focusdo.

use serde::Serialize;
use serde_json::json;

use crate::core::task::Task;
use crate::error::FocusdoError;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `FocusdoError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], list_name: &str) -> Result<String, FocusdoError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `FocusdoError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, FocusdoError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FocusdoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusdoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::{Category, Priority};
    use chrono::Utc;

    fn make_task(title: &str, done: bool) -> Task {
        Task {
            id: 3,
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
    fn test_format_tasks_json_empty_list() {
        let tasks: Vec<Task> = vec![];
        let result = format_tasks_json(&tasks, "Today").unwrap();

        assert!(result.contains("\"list\": \"Today\""));
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_tasks_json_single_task() {
        let tasks = vec![make_task("Buy milk", false)];
        let result = format_tasks_json(&tasks, "Inbox").unwrap();

        assert!(result.contains("\"list\": \"Inbox\""));
        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"title\": \"Buy milk\""));
        assert!(result.contains("\"id\": 3"));
        assert!(result.contains("\"done\": false"));
    }

    #[test]
    fn test_format_tasks_json_multiple_tasks() {
        let tasks = vec![
            make_task("Task 1", false),
            make_task("Task 2", true),
            make_task("Task 3", false),
        ];
        let result = format_tasks_json(&tasks, "Today").unwrap();

        assert!(result.contains("\"count\": 3"));
        assert!(result.contains("\"Task 1\""));
        assert!(result.contains("\"Task 2\""));
        assert!(result.contains("\"Task 3\""));
    }

    #[test]
    fn test_format_task_json_fields() {
        let mut task = make_task("Detailed task", true);
        task.note = Some("context".to_string());
        task.priority = Priority::High;
        task.estimate_min = Some(15);
        task.category = Category::Week;
        let result = format_task_json(&task).unwrap();

        assert!(result.contains("\"title\": \"Detailed task\""));
        assert!(result.contains("\"done\": true"));
        assert!(result.contains("\"note\": \"context\""));
        assert!(result.contains("\"priority\": \"high\""));
        assert!(result.contains("\"estimateMin\": 15"));
        assert!(result.contains("\"category\": \"week\""));
        assert!(result.contains("\"createdAt\""));
    }

    #[test]
    fn test_to_json_generic() {
        let task = make_task("Generic test", false);
        let result = to_json(&task).unwrap();

        assert!(result.contains("\"title\": \"Generic test\""));
    }

    #[test]
    fn test_json_preserves_special_characters() {
        let mut task = make_task("Task with \"quotes\" and \\ backslashes", false);
        task.note = Some("Line 1\nLine 2\tTabbed".to_string());
        let result = format_task_json(&task).unwrap();

        assert!(result.contains("\\\"quotes\\\""));
        assert!(result.contains("\\\\"));
        assert!(result.contains("\\n"));
        assert!(result.contains("\\t"));
    }
}
