//! Toast notification queue with auto-expiry and eviction.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default lifetime of an auto-dismissing toast.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Default maximum number of toasts shown at once.
pub const DEFAULT_MAX_TOASTS: usize = 3;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToastLevel {
    /// Informational message
    #[default]
    Info,
    /// Operation succeeded
    Success,
    /// Something needs attention
    Warning,
    /// Operation failed
    Error,
}

/// A toast definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Severity level
    pub level: ToastLevel,
    /// Message text
    pub message: String,
    /// Lifetime before auto-dismissal; `None` means sticky
    pub duration: Option<Duration>,
    /// Whether a close button is offered
    pub closable: bool,
}

impl Toast {
    /// Create a toast with the default duration.
    #[must_use]
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            duration: Some(DEFAULT_TOAST_DURATION),
            closable: true,
        }
    }

    /// Set the lifetime.
    #[must_use]
    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keep the toast until dismissed by hand.
    #[must_use]
    pub const fn sticky(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Set whether a close button is offered.
    #[must_use]
    pub const fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Expiry {
    Running { deadline: Instant },
    Paused { remaining: Duration },
    Sticky,
}

/// A toast currently in the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    /// Queue-assigned ID
    pub id: u64,
    /// The toast definition
    pub toast: Toast,
    expiry: Expiry,
}

impl ActiveToast {
    /// Fraction of the lifetime left, in `0.0..=1.0`. Sticky toasts
    /// report `1.0`.
    #[must_use]
    pub fn progress(&self, at: Instant) -> f32 {
        let Some(total) = self.toast.duration else {
            return 1.0;
        };
        if total.is_zero() {
            return 0.0;
        }
        let remaining = match self.expiry {
            Expiry::Running { deadline } => deadline.saturating_duration_since(at),
            Expiry::Paused { remaining } => remaining,
            Expiry::Sticky => return 1.0,
        };
        (remaining.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Toast queue.
///
/// Time never advances on its own: the host calls [`ToastQueue::tick`]
/// with the current instant and removes whatever expired.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<ActiveToast>,
    max_toasts: usize,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    /// Create a queue with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            max_toasts: DEFAULT_MAX_TOASTS,
            next_id: 1,
        }
    }

    /// Set the maximum number of simultaneous toasts.
    #[must_use]
    pub fn max_toasts(mut self, max: usize) -> Self {
        self.max_toasts = max.max(1);
        self
    }

    /// The queued toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[ActiveToast] {
        &self.toasts
    }

    /// Number of queued toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Enqueue a toast at the given time, evicting the oldest one if the
    /// queue is full. Returns the assigned ID.
    pub fn push(&mut self, toast: Toast, at: Instant) -> u64 {
        if self.toasts.len() >= self.max_toasts {
            let evicted = self.toasts.remove(0);
            debug!(id = evicted.id, "toast evicted");
        }
        let id = self.next_id;
        self.next_id += 1;
        let expiry = match toast.duration {
            Some(d) => Expiry::Running { deadline: at + d },
            None => Expiry::Sticky,
        };
        self.toasts.push(ActiveToast { id, toast, expiry });
        id
    }

    /// Enqueue an info toast.
    pub fn info(&mut self, message: impl Into<String>, at: Instant) -> u64 {
        self.push(Toast::new(ToastLevel::Info, message), at)
    }

    /// Enqueue a success toast.
    pub fn success(&mut self, message: impl Into<String>, at: Instant) -> u64 {
        self.push(Toast::new(ToastLevel::Success, message), at)
    }

    /// Enqueue a warning toast.
    pub fn warning(&mut self, message: impl Into<String>, at: Instant) -> u64 {
        self.push(Toast::new(ToastLevel::Warning, message), at)
    }

    /// Enqueue an error toast.
    pub fn error(&mut self, message: impl Into<String>, at: Instant) -> u64 {
        self.push(Toast::new(ToastLevel::Error, message), at)
    }

    /// Dismiss a toast by ID. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Pause a toast's timer (hover). Sticky or already-paused toasts
    /// are left alone.
    pub fn pause(&mut self, id: u64, at: Instant) {
        if let Some(active) = self.toasts.iter_mut().find(|t| t.id == id) {
            if let Expiry::Running { deadline } = active.expiry {
                active.expiry = Expiry::Paused {
                    remaining: deadline.saturating_duration_since(at),
                };
            }
        }
    }

    /// Resume a paused toast's timer.
    pub fn resume(&mut self, id: u64, at: Instant) {
        if let Some(active) = self.toasts.iter_mut().find(|t| t.id == id) {
            if let Expiry::Paused { remaining } = active.expiry {
                active.expiry = Expiry::Running {
                    deadline: at + remaining,
                };
            }
        }
    }

    /// Remove toasts whose lifetime has elapsed, returning their IDs.
    pub fn tick(&mut self, at: Instant) -> Vec<u64> {
        let mut expired = Vec::new();
        self.toasts.retain(|t| match t.expiry {
            Expiry::Running { deadline } if at >= deadline => {
                expired.push(t.id);
                false
            }
            _ => true,
        });
        expired
    }
}
