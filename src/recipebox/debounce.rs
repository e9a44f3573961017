//! # Debouncing
//!
//! Search text arrives one keystroke at a time, but the list should only be
//! recomputed once typing pauses. [`Debouncer`] holds at most one pending value:
//!
//! - [`Debouncer::schedule`] replaces whatever was pending and restarts the
//!   quiet window. The replaced value is dropped, never merged or queued.
//! - [`Debouncer::poll`] hands the value over once the window has elapsed.
//! - [`Debouncer::cancel`] and [`Debouncer::flush`] drop or release it early.
//!
//! There is no timer thread. The caller supplies the current [`Instant`] on
//! every call, so the same type drives an event loop and a test that feeds a
//! scripted timeline.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before search text applies.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value with `value`, due one delay after `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
        });
    }

    /// Take the pending value if its window has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes available.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
