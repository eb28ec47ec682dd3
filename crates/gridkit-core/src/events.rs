//! State-change messages and the publish-subscribe bus that carries them.
//!
//! Cross-cutting notifications travel through an explicit [`Bus`] injected
//! where it is needed, never a process-wide singleton.

use crate::column::ColumnSpec;
use crate::filter::FilterState;
use std::fmt;

/// Message emitted when the active sort key changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChanged {
    /// Sorted column id, `None` when sorting was cleared
    pub column_id: Option<String>,
    /// Sort direction
    pub descending: bool,
}

/// Message emitted when any per-column filter changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChanged {
    /// The full filter state after the change
    pub filters: FilterState,
}

/// Message emitted when the global search term changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchChanged {
    /// The new term, empty when cleared
    pub term: String,
}

/// Message emitted when the page window moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChanged {
    /// The new 1-based page
    pub page: usize,
}

/// Message emitted when the page size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeChanged {
    /// The new page size
    pub size: usize,
}

/// Message emitted after any structural column change (visibility or
/// order), carrying the full updated descriptor list so the consumer can
/// persist or propagate layout preferences.
#[derive(Debug, Clone)]
pub struct ColumnsChanged {
    /// The full column list in storage order
    pub columns: Vec<ColumnSpec>,
}

/// Message emitted when a display row is activated (clicked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActivated {
    /// The row's stable key
    pub key: String,
    /// Index within the current display window
    pub index: usize,
}

/// Everything a table view can announce.
#[derive(Debug, Clone)]
pub enum TableEvent {
    Sort(SortChanged),
    Filter(FilterChanged),
    Search(SearchChanged),
    Page(PageChanged),
    PageSize(PageSizeChanged),
    Columns(ColumnsChanged),
    Row(RowActivated),
}

/// Handle returned by [`Bus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A synchronous publish-subscribe channel.
///
/// Subscribers run on the publishing thread in subscription order;
/// delivery is immediate, there is no queue.
pub struct Bus<E> {
    subscribers: Vec<(SubscriberId, Box<dyn Fn(&E) + Send>)>,
    next_id: u64,
}

impl<E> Default for Bus<E> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E> Bus<E> {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    pub fn subscribe(&mut self, f: impl Fn(&E) + Send + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Deliver an event to every subscriber.
    pub fn publish(&self, event: &E) {
        for (_, f) in &self.subscribers {
            f(event);
        }
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E> fmt::Debug for Bus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let mut bus: Bus<PageChanged> = Bus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            bus.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        }
        bus.publish(&PageChanged { page: 2 });
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut bus: Bus<PageChanged> = Bus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let id = {
            let hits = Arc::clone(&hits);
            bus.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        bus.publish(&PageChanged { page: 1 });
        bus.unsubscribe(id);
        bus.publish(&PageChanged { page: 2 });
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_id_ignored() {
        let mut bus: Bus<PageChanged> = Bus::new();
        let id = bus.subscribe(|_| {});
        bus.unsubscribe(id);
        bus.unsubscribe(id);
    }

    #[test]
    fn test_event_payloads() {
        let event = TableEvent::Sort(SortChanged {
            column_id: Some("age".into()),
            descending: true,
        });
        match event {
            TableEvent::Sort(s) => {
                assert_eq!(s.column_id.as_deref(), Some("age"));
                assert!(s.descending);
            }
            _ => panic!("wrong variant"),
        }
    }
}
