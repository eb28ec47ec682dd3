//! Sort engine: single-key stable sort with empty values last.

use crate::column::ColumnSpec;
use crate::row::Row;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The active sort key. At most one column sorts at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Sorted column id
    pub column_id: String,
    /// Descending when true, ascending otherwise
    pub descending: bool,
}

impl SortState {
    /// Ascending sort on a column.
    #[must_use]
    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: false,
        }
    }

    /// Descending sort on a column.
    #[must_use]
    pub fn descending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: true,
        }
    }

    /// Next sort state after a header click: a new column starts
    /// ascending, a repeat click flips the direction.
    #[must_use]
    pub fn toggled(current: Option<&Self>, column_id: &str) -> Self {
        match current {
            Some(s) if s.column_id == column_id => Self {
                column_id: column_id.to_string(),
                descending: !s.descending,
            },
            _ => Self::ascending(column_id),
        }
    }
}

/// Order a row set by the active sort key.
///
/// No-op when `state` is `None` or names an unknown column. Empty keys
/// sort last regardless of direction; equal keys preserve input order.
#[must_use]
pub fn sort(rows: &[Row], columns: &[ColumnSpec], state: Option<&SortState>) -> Vec<Row> {
    let Some(state) = state else {
        return rows.to_vec();
    };
    let Some(column) = columns.iter().find(|c| c.id == state.column_id) else {
        return rows.to_vec();
    };

    // Decorate with keys once; accessors are pure but not free.
    let mut keyed: Vec<(crate::value::Value, Row)> = rows
        .iter()
        .map(|row| (column.value_for(row), row.clone()))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.compare(b);
            if state.descending {
                ord.reverse()
            } else {
                ord
            }
        }
    });
    tracing::trace!(
        column = %state.column_id,
        descending = state.descending,
        rows = keyed.len(),
        "sort applied"
    );
    keyed.into_iter().map(|(_, row)| row).collect()
}
