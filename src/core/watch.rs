//! Live task collection handle.
//!
//! A [`TaskWatch`] is the consumer side of the store's observe contract: the
//! store pushes a full snapshot after every successful mutation, and the
//! watch keeps the freshest one available without the consumer re-querying.
//! Consumption is cooperative and single-threaded; `latest` drains whatever
//! snapshots have been published since the last call.

use std::sync::mpsc::{Receiver, Sender};

use crate::core::task::Task;

/// Publisher half of a task watch, held by the store.
#[derive(Debug)]
pub struct TaskPublisher {
    tx: Sender<Vec<Task>>,
}

impl TaskPublisher {
    /// Push a snapshot to the watcher.
    ///
    /// Returns false if the watcher has been dropped, in which case the
    /// store should discard this publisher.
    pub fn publish(&self, snapshot: Vec<Task>) -> bool {
        self.tx.send(snapshot).is_ok()
    }
}

/// A continuously updated view of the store's tasks.
#[derive(Debug)]
pub struct TaskWatch {
    rx: Receiver<Vec<Task>>,
    latest: Vec<Task>,
}

impl TaskWatch {
    /// Create a watch primed with the current snapshot, plus its publisher.
    #[must_use]
    pub fn channel(initial: Vec<Task>) -> (TaskPublisher, Self) {
        let (tx, rx) = std::sync::mpsc::channel();
        (
            TaskPublisher { tx },
            Self {
                rx,
                latest: initial,
            },
        )
    }

    /// The freshest snapshot published so far.
    pub fn latest(&mut self) -> &[Task] {
        self.drain();
        &self.latest
    }

    /// Drain pending snapshots. Returns true if a newer one arrived.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        while let Ok(snapshot) = self.rx.try_recv() {
            self.latest = snapshot;
            changed = true;
        }
        changed
    }

    /// Look up a task by id in the freshest snapshot.
    pub fn find(&mut self, id: i64) -> Option<Task> {
        self.latest().iter().find(|t| t.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::{Category, Priority};
    use chrono::Utc;

    fn make_task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            note: None,
            done: false,
            priority: Priority::Normal,
            estimate_min: None,
            due: None,
            category: Category::Day,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_watch_starts_with_initial_snapshot() {
        let (_publisher, mut watch) = TaskWatch::channel(vec![make_task(1, "a")]);
        assert_eq!(watch.latest().len(), 1);
        assert_eq!(watch.latest()[0].title, "a");
    }

    #[test]
    fn test_watch_sees_published_snapshots() {
        let (publisher, mut watch) = TaskWatch::channel(vec![]);
        assert!(watch.latest().is_empty());

        assert!(publisher.publish(vec![make_task(1, "a"), make_task(2, "b")]));
        assert!(watch.drain());
        assert_eq!(watch.latest().len(), 2);
    }

    #[test]
    fn test_watch_keeps_only_freshest() {
        let (publisher, mut watch) = TaskWatch::channel(vec![]);
        publisher.publish(vec![make_task(1, "a")]);
        publisher.publish(vec![make_task(1, "a"), make_task(2, "b")]);
        publisher.publish(vec![make_task(2, "b")]);

        let latest = watch.latest();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].id, 2);
    }

    #[test]
    fn test_publish_after_watch_dropped() {
        let (publisher, watch) = TaskWatch::channel(vec![]);
        drop(watch);
        assert!(!publisher.publish(vec![]));
    }

    #[test]
    fn test_find_by_id() {
        let (_publisher, mut watch) =
            TaskWatch::channel(vec![make_task(1, "a"), make_task(2, "b")]);
        assert_eq!(watch.find(2).map(|t| t.title), Some("b".to_string()));
        assert!(watch.find(99).is_none());
    }
}
