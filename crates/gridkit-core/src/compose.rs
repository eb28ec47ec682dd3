//! View composer: orchestrates filter → sort → paginate and combines the
//! result with the column layout into a render-ready projection.

use crate::column::ColumnSpec;
use crate::events::{
    Bus, ColumnsChanged, FilterChanged, PageChanged, PageSizeChanged, RowActivated, SearchChanged,
    SortChanged, SubscriberId, TableEvent,
};
use crate::filter::{filter, FilterState, SearchQuery};
use crate::layout::ColumnLayout;
use crate::page::{paginate, PageState};
use crate::row::{Row, RowKey};
use crate::sort::{sort, SortState};
use crate::value::Value;

/// A row ready for display, keyed for stable re-render identity.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Stable row key
    pub key: String,
    /// The row itself
    pub row: Row,
}

/// The render-ready projection of a table's current state.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    /// Rows in the current page window, filtered and sorted
    pub rows: Vec<DisplayRow>,
    /// Visible columns in display order
    pub columns: Vec<ColumnSpec>,
    /// Filtered row count before pagination
    pub total_filtered: usize,
    /// Page count when pagination is enabled
    pub page_count: Option<usize>,
}

/// A table view: raw rows plus interaction state, recomputed on demand.
///
/// Recomputation is pull-based: [`TableView::snapshot`] rebuilds the
/// projection from raw data every time, in the fixed order filter, then
/// sort, then paginate. State changes announce themselves on the view's
/// [`Bus`] as [`TableEvent`]s.
#[derive(Debug)]
pub struct TableView {
    rows: Vec<Row>,
    layout: ColumnLayout,
    filters: FilterState,
    search: SearchQuery,
    /// When a server-side search handler owns the term, the local search
    /// predicate is skipped and the caller re-supplies rows.
    external_search: bool,
    sort_state: Option<SortState>,
    pages: Option<PageState>,
    row_key: RowKey,
    bus: Bus<TableEvent>,
}

impl TableView {
    /// Create a view over the given column set with no rows.
    #[must_use]
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            rows: Vec::new(),
            layout: ColumnLayout::new(columns),
            filters: FilterState::new(),
            search: SearchQuery::default(),
            external_search: false,
            sort_state: None,
            pages: None,
            row_key: RowKey::default(),
            bus: Bus::new(),
        }
    }

    /// Supply the raw row set.
    #[must_use]
    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    /// Choose how rows are keyed for re-render identity.
    #[must_use]
    pub fn row_key(mut self, key: RowKey) -> Self {
        self.row_key = key;
        self
    }

    /// Enable pagination with the given page size.
    #[must_use]
    pub fn paginated(mut self, page_size: usize) -> Self {
        self.pages = Some(PageState::with_page_size(page_size));
        self
    }

    /// Restrict the global search to specific fields.
    #[must_use]
    pub fn searchable_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.search.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Hand the search term to an external handler instead of the local
    /// predicate.
    #[must_use]
    pub const fn external_search(mut self, external: bool) -> Self {
        self.external_search = external;
        self
    }

    /// Set a default sort.
    #[must_use]
    pub fn default_sort(mut self, state: SortState) -> Self {
        self.sort_state = Some(state);
        self
    }

    // --- state transitions ---

    /// Replace the raw rows. Filters, sort, and page state survive; the
    /// page clamps on the next snapshot if the set shrank.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows = rows.into_iter().collect();
    }

    /// Cycle the sort on a column header click. Ignored for unknown or
    /// unsortable columns.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let sortable = self
            .layout
            .columns()
            .iter()
            .any(|c| c.id == column_id && c.sortable);
        if !sortable {
            return;
        }
        let next = SortState::toggled(self.sort_state.as_ref(), column_id);
        tracing::debug!(column = column_id, descending = next.descending, "sort toggled");
        self.sort_state = Some(next.clone());
        self.bus.publish(&TableEvent::Sort(SortChanged {
            column_id: Some(next.column_id),
            descending: next.descending,
        }));
    }

    /// Drop the active sort.
    pub fn clear_sort(&mut self) {
        if self.sort_state.take().is_some() {
            self.bus.publish(&TableEvent::Sort(SortChanged {
                column_id: None,
                descending: false,
            }));
        }
    }

    /// Set one column's filter value; blank values clear the constraint.
    pub fn set_filter(&mut self, column_id: impl Into<String>, value: impl Into<Value>) {
        self.filters.set(column_id, value);
        self.bus.publish(&TableEvent::Filter(FilterChanged {
            filters: self.filters.clone(),
        }));
    }

    /// Drop every per-column filter.
    pub fn clear_filters(&mut self) {
        if !self.filters.is_empty() {
            self.filters.clear_all();
            self.bus.publish(&TableEvent::Filter(FilterChanged {
                filters: self.filters.clone(),
            }));
        }
    }

    /// Set the global search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.search.term != term {
            self.search.term.clone_from(&term);
            self.bus
                .publish(&TableEvent::Search(SearchChanged { term }));
        }
    }

    /// Move to a page.
    pub fn set_page(&mut self, page: usize) {
        if let Some(pages) = &mut self.pages {
            pages.set_page(page);
            let page = pages.current_page;
            self.bus.publish(&TableEvent::Page(PageChanged { page }));
        }
    }

    /// Change the page size.
    pub fn set_page_size(&mut self, size: usize) {
        if let Some(pages) = &mut self.pages {
            pages.set_page_size(size);
            let size = pages.page_size;
            self.bus
                .publish(&TableEvent::PageSize(PageSizeChanged { size }));
        }
    }

    /// Flip a column's visibility.
    pub fn toggle_column(&mut self, column_id: &str) {
        if let Some(changed) = self.layout.toggle_visibility(column_id) {
            self.publish_columns(changed);
        }
    }

    /// Move a column within the unfixed block.
    pub fn reorder_columns(&mut self, from: usize, to: usize) {
        if let Some(changed) = self.layout.reorder(from, to) {
            self.publish_columns(changed);
        }
    }

    fn publish_columns(&self, changed: ColumnsChanged) {
        self.bus.publish(&TableEvent::Columns(changed));
    }

    /// Announce a click on a display row. Out-of-window indices are
    /// ignored.
    pub fn activate_row(&mut self, index: usize) {
        let snapshot = self.snapshot();
        if let Some(display) = snapshot.rows.get(index) {
            self.bus.publish(&TableEvent::Row(RowActivated {
                key: display.key.clone(),
                index,
            }));
        }
    }

    // --- projections ---

    /// The column layout manager, for resize gestures.
    pub fn layout_mut(&mut self) -> &mut ColumnLayout {
        &mut self.layout
    }

    /// The column layout manager.
    #[must_use]
    pub const fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// The active sort key.
    #[must_use]
    pub const fn sort_state(&self) -> Option<&SortState> {
        self.sort_state.as_ref()
    }

    /// The active filters.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The pagination state, if enabled.
    #[must_use]
    pub const fn page_state(&self) -> Option<&PageState> {
        self.pages.as_ref()
    }

    /// Subscribe to this view's events.
    pub fn on_event(&mut self, f: impl Fn(&TableEvent) + Send + 'static) -> SubscriberId {
        self.bus.subscribe(f)
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.bus.unsubscribe(id);
    }

    /// Recompute the render-ready projection from raw data.
    ///
    /// `total_items` is synchronized to the filtered count here, before
    /// pagination, so page-count display never trails a filter change.
    pub fn snapshot(&mut self) -> ViewSnapshot {
        let columns = self.layout.columns();
        let no_search = SearchQuery::default();
        let search = if self.external_search {
            &no_search
        } else {
            &self.search
        };
        let filtered = filter(&self.rows, columns, &self.filters, search);
        let sorted = sort(&filtered, columns, self.sort_state.as_ref());

        let total_filtered = sorted.len();
        if let Some(pages) = &mut self.pages {
            pages.set_total_items(total_filtered);
        }
        let windowed = paginate(&sorted, self.pages.as_ref());

        let rows = windowed
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let mut key = self.row_key.key_of(&row);
                if key.is_empty() {
                    // No usable key field; fall back to window position.
                    key = format!("row-{i}");
                }
                DisplayRow { key, row }
            })
            .collect();

        ViewSnapshot {
            rows,
            columns: self.layout.display_columns(),
            total_filtered,
            page_count: self.pages.as_ref().map(PageState::page_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{FilterKind, FixedSide};
    use std::sync::mpsc;

    fn people() -> Vec<Row> {
        vec![
            Row::new().cell("id", 1).cell("name", "Bob").cell("age", 30),
            Row::new().cell("id", 2).cell("name", "Ann").cell("age", 25),
            Row::new().cell("id", 3).cell("name", "Cid").cell("age", 25),
        ]
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("id", "ID"),
            ColumnSpec::new("name", "Name")
                .sortable()
                .filterable(FilterKind::Text),
            ColumnSpec::new("age", "Age")
                .sortable()
                .filterable(FilterKind::Number),
        ]
    }

    fn view() -> TableView {
        TableView::new(columns()).rows(people())
    }

    fn names(snapshot: &ViewSnapshot) -> Vec<String> {
        snapshot
            .rows
            .iter()
            .map(|d| d.row.value("name").display())
            .collect()
    }

    #[test]
    fn test_snapshot_unfiltered() {
        let mut view = view();
        let snap = view.snapshot();
        assert_eq!(snap.rows.len(), 3);
        assert_eq!(snap.total_filtered, 3);
        assert_eq!(snap.page_count, None);
        assert_eq!(snap.columns.len(), 3);
    }

    #[test]
    fn test_sort_by_age_preserves_tie_order() {
        let mut view = view();
        view.toggle_sort("age");
        assert_eq!(names(&view.snapshot()), vec!["Ann", "Cid", "Bob"]);
    }

    #[test]
    fn test_second_page_after_sort() {
        let mut view = TableView::new(columns()).rows(people()).paginated(2);
        view.toggle_sort("age");
        let _ = view.snapshot();
        view.set_page(2);
        assert_eq!(names(&view.snapshot()), vec!["Bob"]);
    }

    #[test]
    fn test_filter_runs_before_sort_and_paginate() {
        let mut view = TableView::new(columns()).rows(people()).paginated(2);
        view.set_filter("age", 25);
        view.toggle_sort("name");
        let snap = view.snapshot();
        assert_eq!(names(&snap), vec!["Ann", "Cid"]);
        assert_eq!(snap.total_filtered, 2);
        assert_eq!(snap.page_count, Some(1));
    }

    #[test]
    fn test_filtered_row_never_appears_on_any_page() {
        let mut view = TableView::new(columns()).rows(people()).paginated(1);
        view.set_filter("name", "an");
        for page in 1..=3 {
            view.set_page(page);
            for name in names(&view.snapshot()) {
                assert_eq!(name, "Ann");
            }
        }
    }

    #[test]
    fn test_total_items_resyncs_on_filter_change() {
        let mut view = TableView::new(columns()).rows(people()).paginated(1);
        // First snapshot seeds total_items so the page change sticks.
        let _ = view.snapshot();
        view.set_page(3);
        view.set_filter("age", 25);
        let snap = view.snapshot();
        assert_eq!(snap.page_count, Some(2));
        // Page clamped from 3 into the shrunken range.
        assert_eq!(view.page_state().map(|p| p.current_page), Some(2));
    }

    #[test]
    fn test_toggle_sort_ignores_unsortable_column() {
        let mut view = view();
        view.toggle_sort("id");
        assert!(view.sort_state().is_none());
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut view = view();
        view.toggle_sort("age");
        view.toggle_sort("age");
        assert_eq!(names(&view.snapshot()), vec!["Bob", "Ann", "Cid"]);
    }

    #[test]
    fn test_search_term_respects_field_set() {
        let mut view = TableView::new(columns())
            .rows(people())
            .searchable_fields(["name"]);
        view.set_search_term("an");
        assert_eq!(names(&view.snapshot()), vec!["Ann"]);
    }

    #[test]
    fn test_external_search_skips_local_predicate() {
        let mut view = TableView::new(columns())
            .rows(people())
            .external_search(true);
        view.set_search_term("an");
        assert_eq!(view.snapshot().rows.len(), 3);
    }

    #[test]
    fn test_hidden_column_excluded_from_projection() {
        let mut view = view();
        view.toggle_column("age");
        let snap = view.snapshot();
        assert!(!snap.columns.iter().any(|c| c.id == "age"));
        view.toggle_column("age");
        let snap = view.snapshot();
        let ids: Vec<&str> = snap.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["id", "name", "age"]);
    }

    #[test]
    fn test_row_keys_from_id_field() {
        let mut view = view();
        let keys: Vec<String> = view.snapshot().rows.iter().map(|d| d.key.clone()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_row_key_fallback_when_field_missing() {
        let mut view = TableView::new(columns()).rows(vec![Row::new().cell("name", "X")]);
        let keys: Vec<String> = view.snapshot().rows.iter().map(|d| d.key.clone()).collect();
        assert_eq!(keys, vec!["row-0"]);
    }

    #[test]
    fn test_events_published_on_transitions() {
        let (tx, rx) = mpsc::channel();
        let mut view = TableView::new(columns()).rows(people()).paginated(2);
        view.on_event(move |event| {
            let name = match event {
                TableEvent::Sort(_) => "sort",
                TableEvent::Filter(_) => "filter",
                TableEvent::Search(_) => "search",
                TableEvent::Page(_) => "page",
                TableEvent::PageSize(_) => "page_size",
                TableEvent::Columns(_) => "columns",
                TableEvent::Row(_) => "row",
            };
            let _ = tx.send(name);
        });

        view.toggle_sort("age");
        view.set_filter("name", "b");
        // Term must keep Bob visible so the row activation below lands.
        view.set_search_term("bo");
        view.set_page(2);
        view.set_page_size(5);
        view.toggle_column("id");
        view.reorder_columns(1, 2);
        view.activate_row(0);

        let seen: Vec<&str> = rx.try_iter().collect();
        assert_eq!(
            seen,
            vec!["sort", "filter", "search", "page", "page_size", "columns", "columns", "row"]
        );
    }

    #[test]
    fn test_activate_row_out_of_window_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();
        view.on_event(move |event| {
            if let TableEvent::Row(r) = event {
                let _ = tx.send(r.clone());
            }
        });
        view.activate_row(99);
        assert!(rx.try_iter().next().is_none());
    }

    #[test]
    fn test_activate_row_reports_key_and_index() {
        let (tx, rx) = mpsc::channel();
        let mut view = view();
        view.toggle_sort("age");
        view.on_event(move |event| {
            if let TableEvent::Row(r) = event {
                let _ = tx.send(r.clone());
            }
        });
        view.activate_row(0);
        let hit = rx.try_iter().next().unwrap();
        // First row after sorting by age is Ann, id 2.
        assert_eq!(hit.key, "2");
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn test_fixed_columns_frame_display_order() {
        let cols = vec![
            ColumnSpec::new("b", "B"),
            ColumnSpec::new("r", "R").fixed(FixedSide::Right),
            ColumnSpec::new("l", "L").fixed(FixedSide::Left),
        ];
        let mut view = TableView::new(cols);
        let snap = view.snapshot();
        let ids: Vec<&str> = snap.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["l", "b", "r"]);
    }

    #[test]
    fn test_set_rows_survives_interaction_state() {
        let mut view = view();
        view.toggle_sort("age");
        view.set_rows(vec![
            Row::new().cell("id", 9).cell("name", "Zed").cell("age", 1),
            Row::new().cell("id", 8).cell("name", "Yan").cell("age", 2),
        ]);
        assert_eq!(names(&view.snapshot()), vec!["Zed", "Yan"]);
    }
}
