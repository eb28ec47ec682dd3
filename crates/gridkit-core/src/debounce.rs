//! Debouncing: collapse bursts of input events into one downstream
//! notification once input activity pauses.
//!
//! Time is passed in explicitly so callers drive the clock; the debouncer
//! never spawns threads or sleeps.

use std::time::{Duration, Instant};

/// Collapses rapid submissions into a single value released after a quiet
/// window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a submission, replacing any pending value and restarting the
    /// quiet window.
    pub fn submit(&mut self, value: T, at: Instant) {
        self.pending = Some((value, at));
    }

    /// Release the pending value if the quiet window has elapsed since the
    /// last submission.
    pub fn poll(&mut self, at: Instant) -> Option<T> {
        match &self.pending {
            Some((_, submitted)) if at.duration_since(*submitted) >= self.window => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Release the pending value immediately, regardless of the window.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Whether a value is waiting for its window to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured quiet window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}
