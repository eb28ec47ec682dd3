//! Property tests for the engine invariants.

use gridkit_core::{
    filter, paginate, sort, ColumnSpec, FilterKind, FilterState, PageState, Row, SearchQuery,
    SortState, Value,
};
use proptest::prelude::*;

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("seq", "Seq").sortable(),
        ColumnSpec::new("name", "Name")
            .sortable()
            .filterable(FilterKind::Text),
        ColumnSpec::new("group", "Group")
            .sortable()
            .filterable(FilterKind::Number),
    ]
}

fn row_strategy() -> impl Strategy<Value = Row> {
    ("[a-e]{0,4}", 0i32..5, proptest::bool::ANY).prop_map(|(name, group, with_group)| {
        let row = Row::new().cell("name", name);
        if with_group {
            row.cell("group", group)
        } else {
            row
        }
    })
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    proptest::collection::vec(row_strategy(), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, row)| row.cell("seq", i as i32))
            .collect()
    })
}

fn seqs(rows: &[Row]) -> Vec<f64> {
    rows.iter()
        .map(|r| r.value("seq").as_number().unwrap_or(-1.0))
        .collect()
}

proptest! {
    #[test]
    fn filter_is_idempotent(rows in rows_strategy(), needle in "[a-e]{0,2}") {
        let cols = columns();
        let mut state = FilterState::new();
        state.set("name", needle);
        let search = SearchQuery::default();

        let once = filter(&rows, &cols, &state, &search);
        let twice = filter(&once, &cols, &state, &search);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_output_is_subsequence(rows in rows_strategy(), needle in "[a-e]{0,2}") {
        let cols = columns();
        let mut state = FilterState::new();
        state.set("name", needle);

        let out = filter(&rows, &cols, &state, &SearchQuery::default());
        let original = seqs(&rows);
        let mut cursor = 0usize;
        for seq in seqs(&out) {
            let pos = original[cursor..]
                .iter()
                .position(|s| *s == seq)
                .map(|p| p + cursor);
            prop_assert!(pos.is_some(), "filtered row not in input order");
            cursor = pos.unwrap_or(cursor) + 1;
        }
    }

    #[test]
    fn sort_is_stable_on_equal_keys(rows in rows_strategy(), descending in proptest::bool::ANY) {
        let cols = columns();
        let state = SortState { column_id: "group".into(), descending };
        let out = sort(&rows, &cols, Some(&state));

        // Rows sharing a group keep their relative input order.
        for pair in out.windows(2) {
            let a = pair[0].value("group");
            let b = pair[1].value("group");
            if a == b {
                let sa = pair[0].value("seq").as_number();
                let sb = pair[1].value("seq").as_number();
                prop_assert!(sa < sb, "tie broke input order: {sa:?} vs {sb:?}");
            }
        }
    }

    #[test]
    fn sort_orders_adjacent_pairs_with_empties_last(rows in rows_strategy()) {
        let cols = columns();
        let state = SortState::ascending("group");
        let out = sort(&rows, &cols, Some(&state));

        let mut seen_empty = false;
        for pair in out.windows(2) {
            let a = pair[0].value("group");
            let b = pair[1].value("group");
            if a.is_empty() {
                seen_empty = true;
            }
            if seen_empty {
                prop_assert!(b.is_empty(), "non-empty key after empty key");
            } else {
                prop_assert_ne!(
                    a.compare(&b),
                    std::cmp::Ordering::Greater,
                    "adjacent pair out of order"
                );
            }
        }
    }

    #[test]
    fn sort_preserves_multiset(rows in rows_strategy(), descending in proptest::bool::ANY) {
        let cols = columns();
        let state = SortState { column_id: "name".into(), descending };
        let out = sort(&rows, &cols, Some(&state));
        let mut a = seqs(&rows);
        let mut b = seqs(&out);
        a.sort_by(f64::total_cmp);
        b.sort_by(f64::total_cmp);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn pages_concatenate_to_the_whole_set(rows in rows_strategy(), page_size in 1usize..10) {
        let mut state = PageState::with_page_size(page_size);
        state.set_total_items(rows.len());

        let mut collected = Vec::new();
        for page in 1..=state.page_count() {
            state.set_page(page);
            collected.extend(paginate(&rows, Some(&state)));
        }
        prop_assert_eq!(seqs(&collected), seqs(&rows));
    }

    #[test]
    fn out_of_range_page_clamps(rows in rows_strategy(), page in 0usize..100, page_size in 1usize..10) {
        let mut state = PageState::with_page_size(page_size);
        state.set_total_items(rows.len());
        state.set_page(page);
        prop_assert!(state.current_page >= 1);
        prop_assert!(state.current_page <= state.page_count());
        let out = paginate(&rows, Some(&state));
        prop_assert!(out.len() <= page_size);
    }

    #[test]
    fn filtered_rows_never_reappear_after_sort(rows in rows_strategy(), group in 0i32..5) {
        let cols = columns();
        let mut state = FilterState::new();
        state.set("group", group);

        let filtered = filter(&rows, &cols, &state, &SearchQuery::default());
        let sorted = sort(&filtered, &cols, Some(&SortState::ascending("name")));
        for row in &sorted {
            prop_assert_eq!(row.value("group"), Value::Number(f64::from(group)));
        }
    }
}
