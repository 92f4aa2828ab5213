//! Application state for the TUI.

use crate::core::controller::TaskController;
use crate::core::task::{Category, Task};
use crate::error::FocusdoError;
use crate::focus::{FocusEngine, FocusSignal};
use crate::storage::TaskStore;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The task list.
    Inbox,
    /// A running focus session.
    Focus,
}

/// Application state.
pub struct App<'a> {
    /// Controller over the live task collection.
    controller: TaskController<'a, TaskStore>,
    /// Focus session engine.
    engine: FocusEngine<'a, TaskStore>,
    /// Current view.
    pub view: View,
    /// Category filter on the task list; `None` shows everything.
    pub filter: Option<Category>,
    /// Tasks currently visible in the active view.
    pub items: Vec<Task>,
    /// Currently selected index.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Pending 'g' key for 'gg' command.
    pub pending_g: bool,
    /// Target session length in minutes, shown next to the clock.
    pub target_minutes: u32,
}

impl<'a> App<'a> {
    /// Create a new app instance showing the task list.
    pub fn new(store: &'a TaskStore, target_minutes: u32) -> Self {
        let controller = TaskController::new(store);
        let engine = FocusEngine::new(store);

        let mut app = Self {
            controller,
            engine,
            view: View::Inbox,
            filter: None,
            items: Vec::new(),
            selected: 0,
            status: Some("Press ? for help".to_string()),
            pending_g: false,
            target_minutes,
        };
        app.refresh();
        app
    }

    /// Re-read the visible task list from the active view's source.
    pub fn refresh(&mut self) {
        self.items = match self.view {
            View::Inbox => {
                let filter = self.filter;
                self.controller
                    .tasks()
                    .iter()
                    .filter(|t| filter.map_or(true, |c| t.category == c))
                    .cloned()
                    .collect()
            }
            View::Focus => self.engine.remaining(),
        };

        // Adjust selection if it's out of bounds
        if !self.items.is_empty() && self.selected >= self.items.len() {
            self.selected = self.items.len() - 1;
        }
    }

    /// Advance the focus session; ends it when every task is done.
    pub fn tick(&mut self) {
        if self.view == View::Focus {
            if let Some(FocusSignal::AllDone) = self.engine.poll() {
                self.end_focus();
                self.status = Some("All tasks done. Session complete".to_string());
            }
        }
        self.refresh();
    }

    /// Seconds elapsed in the running session.
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.engine.elapsed_secs()
    }

    /// Completion progress of the running session.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.engine.progress()
    }

    /// Get the currently selected task.
    pub fn selected_task(&self) -> Option<&Task> {
        self.items.get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.pending_g = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
        self.pending_g = false;
    }

    /// Jump to first item.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending_g = false;
    }

    /// Jump to last item.
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
        self.pending_g = false;
    }

    /// Toggle or complete the selected task, depending on the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the store update fails.
    pub fn toggle_selected(&mut self) -> Result<(), FocusdoError> {
        let Some(task) = self.selected_task().cloned() else {
            return Ok(());
        };

        match self.view {
            View::Inbox => {
                self.controller.toggle_done(task.id)?;
                let verb = if task.done { "Reopened" } else { "Completed" };
                self.status = Some(format!("{verb}: {}", task.title));
            }
            View::Focus => {
                self.engine.mark_done(&task)?;
                self.status = Some(format!("Done: {}", task.title));
            }
        }

        self.refresh();
        Ok(())
    }

    /// Delete the selected task (task list only).
    ///
    /// # Errors
    ///
    /// Returns an error if the store delete fails.
    pub fn delete_selected(&mut self) -> Result<(), FocusdoError> {
        if self.view != View::Inbox {
            return Ok(());
        }
        if let Some(task) = self.selected_task().cloned() {
            self.controller.delete(&task)?;
            self.status = Some(format!("Deleted: {}", task.title));
            self.refresh();
        }
        Ok(())
    }

    /// Switch to the focus view and start the session clock.
    pub fn start_focus(&mut self) {
        self.engine.start();
        self.view = View::Focus;
        self.selected = 0;
        self.status = None;
        self.refresh();
    }

    /// Stop the session clock and return to the task list.
    pub fn end_focus(&mut self) {
        self.engine.stop();
        self.view = View::Inbox;
        self.selected = 0;
        self.refresh();
    }

    /// Cycle the category filter: all -> day -> week -> later -> all.
    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Category::Day),
            Some(Category::Day) => Some(Category::Week),
            Some(Category::Week) => Some(Category::Later),
            Some(Category::Later) => None,
        };
        self.selected = 0;
        self.status = Some(match self.filter {
            Some(c) => format!("Filter: {}", c.as_str()),
            None => "Filter: all".to_string(),
        });
        self.refresh();
    }

    /// Handle 'g' key for 'gg' command.
    pub fn handle_g(&mut self) {
        if self.pending_g {
            self.select_first();
        } else {
            self.pending_g = true;
            self.status = Some("g-".to_string());
        }
    }

    /// Cancel pending 'g' command.
    pub fn cancel_pending(&mut self) {
        self.pending_g = false;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::{Category, TaskDraft};
    use crate::core::traits::TaskRepository;
    use crate::storage::Database;

    fn store_with_day_tasks(titles: &[&str]) -> TaskStore {
        let store = TaskStore::new(Database::open_in_memory().unwrap());
        for title in titles {
            store.insert(TaskDraft::new(*title)).unwrap();
        }
        store
    }

    #[test]
    fn test_new_shows_task_list() {
        let store = store_with_day_tasks(&["a", "b"]);
        let app = App::new(&store, 25);

        assert_eq!(app.view, View::Inbox);
        assert_eq!(app.items.len(), 2);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_navigation_clamps_at_bounds() {
        let store = store_with_day_tasks(&["a", "b"]);
        let mut app = App::new(&store, 25);

        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);

        app.select_first();
        assert_eq!(app.selected, 0);
        app.select_last();
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_toggle_in_inbox_keeps_task_visible() {
        let store = store_with_day_tasks(&["a"]);
        let mut app = App::new(&store, 25);

        app.toggle_selected().unwrap();

        // The list shows done tasks too; only their state flips.
        assert_eq!(app.items.len(), 1);
        assert!(app.items[0].done);
        assert!(app.status.as_deref().unwrap().contains("Completed: a"));
    }

    #[test]
    fn test_focus_marks_done_and_shrinks_remaining() {
        let store = store_with_day_tasks(&["a", "b"]);
        let mut app = App::new(&store, 25);

        app.start_focus();
        assert_eq!(app.view, View::Focus);
        assert_eq!(app.items.len(), 2);

        app.toggle_selected().unwrap();
        assert_eq!(app.items.len(), 1);
        assert!((app.progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_session_ends_when_all_done() {
        let store = store_with_day_tasks(&["only"]);
        let mut app = App::new(&store, 25);

        app.start_focus();
        app.toggle_selected().unwrap();
        app.tick();

        assert_eq!(app.view, View::Inbox);
        assert!(app.status.as_deref().unwrap().contains("Session complete"));
    }

    #[test]
    fn test_focus_scope_excludes_week_tasks() {
        let store = store_with_day_tasks(&["today"]);
        let mut draft = TaskDraft::new("weekly");
        draft.category = Category::Week;
        store.insert(draft).unwrap();

        let mut app = App::new(&store, 25);
        assert_eq!(app.items.len(), 2);

        app.start_focus();
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].title, "today");
        app.end_focus();
    }

    #[test]
    fn test_filter_cycles_through_categories() {
        let store = store_with_day_tasks(&["today"]);
        let mut draft = TaskDraft::new("weekly");
        draft.category = Category::Week;
        store.insert(draft).unwrap();

        let mut app = App::new(&store, 25);
        assert_eq!(app.items.len(), 2);

        app.cycle_filter();
        assert_eq!(app.filter, Some(Category::Day));
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].title, "today");

        app.cycle_filter();
        assert_eq!(app.items[0].title, "weekly");

        app.cycle_filter();
        assert!(app.items.is_empty());

        app.cycle_filter();
        assert_eq!(app.filter, None);
        assert_eq!(app.items.len(), 2);
    }

    #[test]
    fn test_delete_selected() {
        let store = store_with_day_tasks(&["a", "b"]);
        let mut app = App::new(&store, 25);

        app.delete_selected().unwrap();

        assert_eq!(app.items.len(), 1);
        assert_eq!(app.items[0].title, "b");
    }
}
