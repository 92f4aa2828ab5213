//! Task domain types.
//!
//! A [`Task`] is owned by the task store; everything else holds transient
//! copies. Records are replaced wholesale on update (update-by-id) and the
//! creation timestamp is assigned at construction and never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FocusdoError;

/// Task priority, ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    VeryHigh,
}

impl Priority {
    /// Stable name used in the database and CLI.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::VeryHigh => "veryhigh",
        }
    }

    /// Parse a priority name.
    ///
    /// # Errors
    ///
    /// Returns `FocusdoError::Parse` if the name is not a known priority.
    pub fn parse(s: &str) -> Result<Self, FocusdoError> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "veryhigh" | "very-high" => Ok(Self::VeryHigh),
            other => Err(FocusdoError::Parse(format!("Unknown priority: {other}"))),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task category. Only `Day` tasks are in scope for focus mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Day,
    Week,
    Later,
}

impl Category {
    /// Stable name used in the database and CLI.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Later => "later",
        }
    }

    /// Parse a category name.
    ///
    /// # Errors
    ///
    /// Returns `FocusdoError::Parse` if the name is not a known category.
    pub fn parse(s: &str) -> Result<Self, FocusdoError> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "later" => Ok(Self::Later),
            other => Err(FocusdoError::Parse(format!("Unknown category: {other}"))),
        }
    }

    /// All categories, in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Day, Self::Week, Self::Later]
    }

    /// Whether tasks in this category belong to a focus session.
    #[must_use]
    pub const fn is_focus_eligible(&self) -> bool {
        matches!(self, Self::Day)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique id, assigned by the store on insert.
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    pub done: bool,
    pub priority: Priority,
    /// Effort estimate in minutes.
    #[serde(default)]
    pub estimate_min: Option<u32>,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Copy of this task with the completion flag inverted.
    #[must_use]
    pub fn toggled(&self) -> Self {
        let mut copy = self.clone();
        copy.done = !copy.done;
        copy
    }

    /// Copy of this task marked as done.
    #[must_use]
    pub fn completed(&self) -> Self {
        let mut copy = self.clone();
        copy.done = true;
        copy
    }
}

/// A task as submitted for creation, before the store assigns an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub estimate_min: Option<u32>,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Category,
}

impl TaskDraft {
    /// Create a draft with defaults for everything but the title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Normal);
        assert!(Priority::Normal < Priority::High);
        assert!(Priority::High < Priority::VeryHigh);
    }

    #[test]
    fn test_priority_roundtrip() {
        for p in [
            Priority::Low,
            Priority::Normal,
            Priority::High,
            Priority::VeryHigh,
        ] {
            assert_eq!(Priority::parse(p.as_str()).unwrap(), p);
        }
        assert!(Priority::parse("urgent").is_err());
    }

    #[test]
    fn test_category_roundtrip() {
        for c in Category::all() {
            assert_eq!(Category::parse(c.as_str()).unwrap(), c);
        }
        assert!(Category::parse("month").is_err());
    }

    #[test]
    fn test_only_day_is_focus_eligible() {
        assert!(Category::Day.is_focus_eligible());
        assert!(!Category::Week.is_focus_eligible());
        assert!(!Category::Later.is_focus_eligible());
    }

    #[test]
    fn test_toggled_inverts_done() {
        let task = Task {
            id: 1,
            title: "Write tests".to_string(),
            note: None,
            done: false,
            priority: Priority::Normal,
            estimate_min: None,
            due: None,
            category: Category::Day,
            created_at: Utc::now(),
        };

        let toggled = task.toggled();
        assert!(toggled.done);
        assert_eq!(toggled.id, task.id);
        assert!(toggled.toggled().done == task.done);
    }

    #[test]
    fn test_completed_is_idempotent() {
        let task = Task {
            id: 7,
            title: "Ship it".to_string(),
            note: None,
            done: true,
            priority: Priority::High,
            estimate_min: Some(30),
            due: None,
            category: Category::Day,
            created_at: Utc::now(),
        };

        assert!(task.completed().done);
    }
}
