//! Paginator: slices a row set into a page window.

use crate::row::Row;
use serde::{Deserialize, Serialize};

/// Default page size when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state owned by the consumer.
///
/// `current_page` is 1-based. Out-of-range pages clamp rather than error.
/// `total_items` tracks the pre-pagination filtered row count; the view
/// composer keeps it synchronized on every recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Active page, 1-based
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Pre-pagination row count
    pub total_items: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

impl PageState {
    /// Create a state with the given page size.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Number of pages covering `total_items`. At least 1 so an empty set
    /// still has a current page to clamp to. The fields are public, so a
    /// zero page size can arrive through deserialization; it behaves as 1.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        let size = if self.page_size == 0 { 1 } else { self.page_size };
        if self.total_items == 0 {
            1
        } else {
            self.total_items.div_ceil(size)
        }
    }

    /// The current page clamped into `1..=page_count`.
    #[must_use]
    pub const fn clamped_page(&self) -> usize {
        let count = self.page_count();
        if self.current_page < 1 {
            1
        } else if self.current_page > count {
            count
        } else {
            self.current_page
        }
    }

    /// Move to a page, clamping into range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.current_page = self.clamped_page();
    }

    /// Change the page size, keeping the window in range.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = self.clamped_page();
    }

    /// Record the pre-pagination row count, clamping the page if the set
    /// shrank underneath it.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        let clamped = self.clamped_page();
        if clamped != self.current_page {
            tracing::debug!(
                from = self.current_page,
                to = clamped,
                total,
                "page clamped after total change"
            );
            self.current_page = clamped;
        }
    }
}

/// Slice the row set to the current page window.
///
/// `None` state returns all rows: pagination is disabled unless a config
/// is supplied.
#[must_use]
pub fn paginate(rows: &[Row], state: Option<&PageState>) -> Vec<Row> {
    let Some(state) = state else {
        return rows.to_vec();
    };
    let page = state.clamped_page();
    let size = state.page_size.max(1);
    let start = (page - 1).saturating_mul(size).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());
    rows[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n).map(|i| Row::new().cell("id", i as i32)).collect()
    }

    fn ids(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|r| r.value("id").display()).collect()
    }

    #[test]
    fn test_no_state_returns_all() {
        let all = rows(7);
        assert_eq!(paginate(&all, None).len(), 7);
    }

    #[test]
    fn test_first_page() {
        let state = PageState {
            current_page: 1,
            page_size: 2,
            total_items: 3,
        };
        let out = paginate(&rows(3), Some(&state));
        assert_eq!(ids(&out), vec!["0", "1"]);
    }

    #[test]
    fn test_last_partial_page() {
        let state = PageState {
            current_page: 2,
            page_size: 2,
            total_items: 3,
        };
        let out = paginate(&rows(3), Some(&state));
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let state = PageState {
            current_page: 99,
            page_size: 2,
            total_items: 3,
        };
        let out = paginate(&rows(3), Some(&state));
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let state = PageState {
            current_page: 0,
            page_size: 2,
            total_items: 3,
        };
        let out = paginate(&rows(3), Some(&state));
        assert_eq!(ids(&out), vec!["0", "1"]);
    }

    #[test]
    fn test_empty_set() {
        let state = PageState {
            current_page: 1,
            page_size: 5,
            total_items: 0,
        };
        assert!(paginate(&[], Some(&state)).is_empty());
    }

    #[test]
    fn test_page_count() {
        let mut state = PageState::with_page_size(10);
        state.total_items = 0;
        assert_eq!(state.page_count(), 1);
        state.total_items = 10;
        assert_eq!(state.page_count(), 1);
        state.total_items = 11;
        assert_eq!(state.page_count(), 2);
    }

    #[test]
    fn test_set_total_items_clamps_current_page() {
        let mut state = PageState {
            current_page: 5,
            page_size: 10,
            total_items: 50,
        };
        state.set_total_items(12);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_set_page_size_keeps_window_in_range() {
        let mut state = PageState {
            current_page: 4,
            page_size: 5,
            total_items: 20,
        };
        state.set_page_size(10);
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_page_size_floor_of_one() {
        let state = PageState::with_page_size(0);
        assert_eq!(state.page_size, 1);
    }

    #[test]
    fn test_zero_page_size_in_literal_state_behaves_as_one() {
        // The builders floor the size, but literal construction (and
        // deserialized state) can carry a zero straight in.
        let state = PageState {
            current_page: 1,
            page_size: 0,
            total_items: 5,
        };
        assert_eq!(state.page_count(), 5);
        assert_eq!(ids(&paginate(&rows(5), Some(&state))), vec!["0"]);

        let json = r#"{"current_page":3,"page_size":0,"total_items":5}"#;
        let state: PageState = serde_json::from_str(json).unwrap();
        assert_eq!(state.clamped_page(), 3);
        assert_eq!(ids(&paginate(&rows(5), Some(&state))), vec!["2"]);
    }

    #[test]
    fn test_pages_cover_whole_set_once() {
        let all = rows(23);
        let mut state = PageState::with_page_size(5);
        state.set_total_items(all.len());
        let mut seen = Vec::new();
        for page in 1..=state.page_count() {
            state.set_page(page);
            seen.extend(ids(&paginate(&all, Some(&state))));
        }
        assert_eq!(seen, ids(&all));
    }
}
