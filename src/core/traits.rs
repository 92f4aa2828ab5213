//! Shared traits for task persistence.
//!
//! The controllers and the focus engine talk to storage exclusively through
//! [`TaskRepository`], so they can be exercised against a mock as well as
//! the real SQLite-backed store.

use crate::core::task::{Task, TaskDraft};
use crate::core::watch::TaskWatch;
use crate::error::FocusdoError;

/// Durable keyed storage of task records.
///
/// `observe_all` must reflect every successful mutation exactly once, in a
/// consistent order, without requiring the caller to re-query. Mutations are
/// serialized by the store itself; callers need no locking.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository {
    /// Subscribe to a live view of all tasks, primed with the current
    /// contents.
    fn observe_all(&self) -> TaskWatch;

    /// Fresh snapshot of all tasks, straight from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn all(&self) -> Result<Vec<Task>, FocusdoError>;

    /// Persist a new task. The store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert(&self, draft: TaskDraft) -> Result<Task, FocusdoError>;

    /// Replace the stored record with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn update(&self, task: &Task) -> Result<(), FocusdoError>;

    /// Remove the record with this task's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete(&self, task: &Task) -> Result<(), FocusdoError>;
}
