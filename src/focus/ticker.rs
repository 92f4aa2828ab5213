//! Cancellable repeating ticker.
//!
//! A [`Ticker`] emits one pulse per period from a background thread until it
//! is cancelled. Pulses queue up in a channel and are consumed cooperatively
//! with [`Ticker::drain`]; nothing awaits them. Cancellation is explicit and
//! also runs on drop, so a discarded session cannot leak a running ticker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// How often the background thread checks the cancellation flag.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A repeating timer with an explicit cancellation handle.
#[derive(Debug)]
pub struct Ticker {
    rx: Receiver<()>,
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start a ticker that pulses once per `period`.
    #[must_use]
    pub fn every(period: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, rx) = std::sync::mpsc::channel();

        let flag = Arc::clone(&cancelled);
        let handle = std::thread::spawn(move || run(&tx, &flag, period));

        Self {
            rx,
            cancelled,
            handle: Some(handle),
        }
    }

    /// Consume all pending pulses, returning how many there were.
    pub fn drain(&self) -> u64 {
        let mut n = 0;
        while self.rx.try_recv().is_ok() {
            n += 1;
        }
        n
    }

    /// Stop the ticker and wait for its thread to exit.
    ///
    /// Safe to call more than once.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Whether the ticker has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Ticker thread body: sleep in short slices so cancellation is prompt,
/// pulse whenever a period boundary passes.
fn run(tx: &Sender<()>, cancelled: &AtomicBool, period: Duration) {
    let mut next = Instant::now() + period;
    loop {
        if cancelled.load(Ordering::Relaxed) {
            return;
        }

        let now = Instant::now();
        if now >= next {
            if tx.send(()).is_err() {
                return;
            }
            next += period;
        } else {
            std::thread::sleep(POLL_INTERVAL.min(next - now));
        }
    }
}
