//! Task persistence backed by `SQLite`.
//!
//! [`TaskStore`] is the single write path for tasks. Every successful
//! mutation re-reads the table and pushes the fresh snapshot to every
//! live watch, so observers see each change exactly once and always in
//! id order.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::core::task::{Category, Priority, Task, TaskDraft};
use crate::core::traits::TaskRepository;
use crate::core::watch::{TaskPublisher, TaskWatch};
use crate::error::FocusdoError;

use super::Database;

const SELECT_COLUMNS: &str =
    "id, title, note, done, priority, estimate_min, due, category, created_at";

/// Raw row fields before enum and timestamp decoding.
struct TaskRow {
    id: i64,
    title: String,
    note: Option<String>,
    done: i64,
    priority: String,
    estimate_min: Option<u32>,
    due: Option<String>,
    category: String,
    created_at: String,
}

/// `SQLite`-backed task repository.
pub struct TaskStore {
    db: Database,
    watchers: RefCell<Vec<TaskPublisher>>,
}

impl TaskStore {
    /// Wrap an open database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self {
            db,
            watchers: RefCell::new(Vec::new()),
        }
    }

    /// Fetch a single task by id, or `None` if no such row exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row cannot be decoded.
    pub fn get(&self, id: i64) -> Result<Option<Task>, FocusdoError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM tasks WHERE id = ?1");
        let mut stmt = self
            .db
            .connection()
            .prepare(&sql)
            .map_err(|e| FocusdoError::Database(format!("Failed to prepare query: {e}")))?;

        let mut rows = stmt
            .query_map(params![id], row_fields)
            .map_err(|e| FocusdoError::Database(format!("Failed to query task {id}: {e}")))?;

        match rows.next() {
            Some(row) => {
                let row =
                    row.map_err(|e| FocusdoError::Database(format!("Failed to read row: {e}")))?;
                Ok(Some(decode_row(row)?))
            }
            None => Ok(None),
        }
    }

    /// Re-read the table and push the snapshot to every live watch.
    ///
    /// Watches whose receiver has been dropped are pruned here.
    fn publish(&self) -> Result<(), FocusdoError> {
        let snapshot = self.all()?;
        self.watchers
            .borrow_mut()
            .retain(|w| w.publish(snapshot.clone()));
        Ok(())
    }
}

impl TaskRepository for TaskStore {
    fn observe_all(&self) -> TaskWatch {
        let initial = self.all().unwrap_or_default();
        let (publisher, watch) = TaskWatch::channel(initial);
        self.watchers.borrow_mut().push(publisher);
        watch
    }

    fn all(&self) -> Result<Vec<Task>, FocusdoError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM tasks ORDER BY id");
        let mut stmt = self
            .db
            .connection()
            .prepare(&sql)
            .map_err(|e| FocusdoError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_fields)
            .map_err(|e| FocusdoError::Database(format!("Failed to query tasks: {e}")))?;

        let mut tasks = Vec::new();
        for row in rows {
            let row = row.map_err(|e| FocusdoError::Database(format!("Failed to read row: {e}")))?;
            tasks.push(decode_row(row)?);
        }

        Ok(tasks)
    }

    fn insert(&self, draft: TaskDraft) -> Result<Task, FocusdoError> {
        let created_at = Utc::now();

        self.db
            .connection()
            .execute(
                "INSERT INTO tasks (title, note, done, priority, estimate_min, due, category, created_at)
                 VALUES (?1, ?2, 0, ?3, ?4, ?5, ?6, ?7)",
                params![
                    draft.title,
                    draft.note,
                    draft.priority.as_str(),
                    draft.estimate_min,
                    draft.due.map(|d| d.to_rfc3339()),
                    draft.category.as_str(),
                    created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| FocusdoError::Database(format!("Failed to insert task: {e}")))?;

        let id = self.db.connection().last_insert_rowid();

        let task = Task {
            id,
            title: draft.title,
            note: draft.note,
            done: false,
            priority: draft.priority,
            estimate_min: draft.estimate_min,
            due: draft.due,
            category: draft.category,
            created_at,
        };

        self.publish()?;
        Ok(task)
    }

    fn update(&self, task: &Task) -> Result<(), FocusdoError> {
        let changed = self
            .db
            .connection()
            .execute(
                "UPDATE tasks
                 SET title = ?1, note = ?2, done = ?3, priority = ?4,
                     estimate_min = ?5, due = ?6, category = ?7
                 WHERE id = ?8",
                params![
                    task.title,
                    task.note,
                    i64::from(task.done),
                    task.priority.as_str(),
                    task.estimate_min,
                    task.due.map(|d| d.to_rfc3339()),
                    task.category.as_str(),
                    task.id,
                ],
            )
            .map_err(|e| FocusdoError::Database(format!("Failed to update task: {e}")))?;

        if changed == 0 {
            return Err(FocusdoError::NotFound(format!("No task with id {}", task.id)));
        }

        self.publish()
    }

    fn delete(&self, task: &Task) -> Result<(), FocusdoError> {
        let changed = self
            .db
            .connection()
            .execute("DELETE FROM tasks WHERE id = ?1", params![task.id])
            .map_err(|e| FocusdoError::Database(format!("Failed to delete task: {e}")))?;

        if changed == 0 {
            return Err(FocusdoError::NotFound(format!("No task with id {}", task.id)));
        }

        self.publish()
    }
}

fn row_fields(row: &rusqlite::Row) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        id: row.get(0)?,
        title: row.get(1)?,
        note: row.get(2)?,
        done: row.get(3)?,
        priority: row.get(4)?,
        estimate_min: row.get(5)?,
        due: row.get(6)?,
        category: row.get(7)?,
        created_at: row.get(8)?,
    })
}

fn decode_row(row: TaskRow) -> Result<Task, FocusdoError> {
    Ok(Task {
        id: row.id,
        title: row.title,
        note: row.note,
        done: row.done != 0,
        priority: Priority::parse(&row.priority)?,
        estimate_min: row.estimate_min,
        due: row.due.map(|s| parse_timestamp(&s)).transpose()?,
        category: Category::parse(&row.category)?,
        created_at: parse_timestamp(&row.created_at)?,
    })
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, FocusdoError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FocusdoError::Database(format!("Invalid timestamp '{s}': {e}")))
}
