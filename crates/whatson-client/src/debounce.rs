//! Trailing-edge debouncing for bursty input.
//!
//! Watch mode coalesces keystroke-level search updates: each new input
//! invalidates the pending timer and arms a fresh one, so only the last
//! value in a burst triggers a re-filter.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Runs the most recent action after a quiet period.
///
/// Holds at most one pending timer; scheduling a new action aborts the
/// previous one. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `action` to run after the quiet period, replacing any
    /// previously scheduled action that has not fired yet.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action();
        }));
    }

    /// Drops the pending action without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Waits for the pending action (if any) to fire.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
