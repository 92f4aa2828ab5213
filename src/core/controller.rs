//! Task list controller.
//!
//! Mediates between the task store and whatever renders the list. The
//! controller keeps no durable state of its own, only the live watch whose
//! last-seen snapshot is used for lookups.

use crate::core::task::{Task, TaskDraft};
use crate::core::traits::TaskRepository;
use crate::core::watch::TaskWatch;
use crate::error::FocusdoError;

/// Controller for the full task list.
pub struct TaskController<'a, R: TaskRepository> {
    repo: &'a R,
    watch: TaskWatch,
}

impl<'a, R: TaskRepository> TaskController<'a, R> {
    /// Create a controller subscribed to the store.
    pub fn new(repo: &'a R) -> Self {
        let watch = repo.observe_all();
        Self { repo, watch }
    }

    /// The live task collection, in store order.
    pub fn tasks(&mut self) -> &[Task] {
        self.watch.latest()
    }

    /// Invert the completion flag of the task with this id.
    ///
    /// The lookup runs against the latest observed snapshot; if the id is
    /// no longer present the call is a silent no-op, since the snapshot may
    /// be stale by design.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the toggled copy fails.
    pub fn toggle_done(&mut self, id: i64) -> Result<(), FocusdoError> {
        let Some(task) = self.watch.find(id) else {
            return Ok(());
        };
        self.repo.update(&task.toggled())
    }

    /// Persist a new task. The store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add(&self, draft: TaskDraft) -> Result<Task, FocusdoError> {
        self.repo.insert(draft)
    }

    /// Delete a task by identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete(&self, task: &Task) -> Result<(), FocusdoError> {
        self.repo.delete(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::{Category, Priority};
    use crate::core::traits::MockTaskRepository;
    use chrono::Utc;

    fn make_task(id: i64, title: &str, done: bool) -> Task {
        Task {
            id,
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

    fn repo_with_snapshot(tasks: Vec<Task>) -> MockTaskRepository {
        let mut repo = MockTaskRepository::new();
        repo.expect_observe_all()
            .return_once(move || TaskWatch::channel(tasks).1);
        repo
    }

    #[test]
    fn test_toggle_done_persists_inverted_copy() {
        let mut repo = repo_with_snapshot(vec![make_task(1, "a", false)]);
        repo.expect_update()
            .withf(|t| t.id == 1 && t.done)
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = TaskController::new(&repo);
        controller.toggle_done(1).unwrap();
    }

    #[test]
    fn test_toggle_done_missing_id_is_noop() {
        let mut repo = repo_with_snapshot(vec![make_task(1, "a", false)]);
        // No update expectation: any store call would fail the test.
        repo.expect_update().times(0);

        let mut controller = TaskController::new(&repo);
        assert!(controller.toggle_done(99).is_ok());
    }

    #[test]
    fn test_toggle_done_propagates_store_failure() {
        let mut repo = repo_with_snapshot(vec![make_task(1, "a", false)]);
        repo.expect_update()
            .returning(|_| Err(FocusdoError::Database("disk full".to_string())));

        let mut controller = TaskController::new(&repo);
        assert!(matches!(
            controller.toggle_done(1),
            Err(FocusdoError::Database(_))
        ));
    }

    #[test]
    fn test_add_delegates_to_store() {
        let mut repo = repo_with_snapshot(vec![]);
        repo.expect_insert()
            .withf(|d| d.title == "new task")
            .times(1)
            .returning(|d| {
                Ok(Task {
                    id: 1,
                    title: d.title,
                    note: d.note,
                    done: false,
                    priority: d.priority,
                    estimate_min: d.estimate_min,
                    due: d.due,
                    category: d.category,
                    created_at: Utc::now(),
                })
            });

        let controller = TaskController::new(&repo);
        let task = controller.add(TaskDraft::new("new task")).unwrap();
        assert_eq!(task.id, 1);
    }

    #[test]
    fn test_delete_delegates_to_store() {
        let mut repo = repo_with_snapshot(vec![make_task(3, "c", false)]);
        repo.expect_delete()
            .withf(|t| t.id == 3)
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = TaskController::new(&repo);
        let task = controller.tasks()[0].clone();
        controller.delete(&task).unwrap();
    }
}
