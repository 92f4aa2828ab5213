//! Focus session engine.
//!
//! Drives a single timed work session over the focus-eligible tasks
//! (category = Day). The engine owns the elapsed counter and the
//! completion-progress ratio; it is the only thing that mutates them, and
//! it is driven cooperatively from the view loop via [`FocusEngine::poll`].
//!
//! The engine never tears itself down: when every in-scope task is done it
//! emits [`FocusSignal::AllDone`] once and leaves stopping to the caller.

use std::time::Duration;

use crate::core::task::Task;
use crate::core::traits::TaskRepository;
use crate::core::watch::TaskWatch;
use crate::error::FocusdoError;
use crate::focus::ticker::Ticker;

/// Tick period of a real session.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Notification emitted by the engine to its observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSignal {
    /// Every in-scope task is done; the view should exit focus mode.
    AllDone,
}

/// State machine running one focus session.
pub struct FocusEngine<'a, R: TaskRepository> {
    repo: &'a R,
    watch: TaskWatch,
    tick_period: Duration,
    ticker: Option<Ticker>,
    elapsed: u64,
    progress: f64,
    all_done_fired: bool,
}

impl<'a, R: TaskRepository> FocusEngine<'a, R> {
    /// Create an idle engine subscribed to the store. Ticks once per second.
    pub fn new(repo: &'a R) -> Self {
        Self::with_tick_period(repo, TICK_PERIOD)
    }

    /// Create an idle engine with a custom tick period.
    pub fn with_tick_period(repo: &'a R, tick_period: Duration) -> Self {
        let watch = repo.observe_all();
        Self {
            repo,
            watch,
            tick_period,
            ticker: None,
            elapsed: 0,
            progress: 0.0,
            all_done_fired: false,
        }
    }

    /// Start the session: Idle -> Running.
    ///
    /// Elapsed resets to 0 and the all-done signal is re-armed. Calling
    /// start while already Running is a no-op; one ticker per session.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }

        self.elapsed = 0;
        self.all_done_fired = false;
        self.ticker = Some(Ticker::every(self.tick_period));
    }

    /// Advance the session: consume pending ticks and check the
    /// termination condition.
    ///
    /// Each tick adds exactly one logical second; no drift correction.
    /// Returns [`FocusSignal::AllDone`] the first time the in-scope
    /// not-done count reaches zero in this session.
    pub fn poll(&mut self) -> Option<FocusSignal> {
        if let Some(ticker) = &self.ticker {
            self.elapsed += ticker.drain();
        }
        self.watch.drain();

        if !self.all_done_fired && self.remaining().is_empty() {
            self.all_done_fired = true;
            return Some(FocusSignal::AllDone);
        }

        None
    }

    /// Persist this task as completed, then recompute progress.
    ///
    /// Progress is recomputed from a fresh store query rather than the
    /// engine's cached view, so it reflects all completions, not only the
    /// one just made.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the update or re-reading the store
    /// fails; the completion is not silently dropped.
    pub fn mark_done(&mut self, task: &Task) -> Result<(), FocusdoError> {
        self.repo.update(&task.completed())?;
        self.refresh_progress()
    }

    fn refresh_progress(&mut self) -> Result<(), FocusdoError> {
        let scoped: Vec<Task> = self
            .repo
            .all()?
            .into_iter()
            .filter(|t| t.category.is_focus_eligible())
            .collect();

        self.progress = if scoped.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let done = scoped.iter().filter(|t| t.done).count() as f64;
            #[allow(clippy::cast_precision_loss)]
            let total = scoped.len() as f64;
            done / total
        };

        Ok(())
    }

    /// Stop the session: Running -> Idle. No-op when already Idle.
    pub fn stop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Live in-scope task collection (focus-eligible, latest snapshot).
    pub fn in_scope(&mut self) -> Vec<Task> {
        self.watch
            .latest()
            .iter()
            .filter(|t| t.category.is_focus_eligible())
            .cloned()
            .collect()
    }

    /// In-scope tasks not yet done.
    pub fn remaining(&mut self) -> Vec<Task> {
        self.watch
            .latest()
            .iter()
            .filter(|t| t.category.is_focus_eligible() && !t.done)
            .cloned()
            .collect()
    }

    /// Seconds elapsed in this session (logical tick count).
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed
    }

    /// Completion-progress ratio, always within [0, 1].
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether a session is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.ticker.is_some()
    }
}

impl<R: TaskRepository> Drop for FocusEngine<'_, R> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Format an elapsed second count as `HH:MM:SS`.
#[must_use]
pub fn format_elapsed_hms(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
