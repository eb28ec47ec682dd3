//! Filter engine: per-column typed filters plus a global search term.

use crate::column::{ColumnSpec, FilterKind};
use crate::row::Row;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-column filter inputs.
///
/// Absent entries mean "no constraint on this column"; an empty state is
/// the identity transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Filter value by column id
    by_column: HashMap<String, Value>,
}

impl FilterState {
    /// Create an empty filter state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter value for a column. An [`Value::Empty`] or
    /// blank-text value clears the constraint instead.
    pub fn set(&mut self, column_id: impl Into<String>, value: impl Into<Value>) {
        let id = column_id.into();
        let value = value.into();
        let blank = match &value {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        };
        if blank {
            self.by_column.remove(&id);
        } else {
            self.by_column.insert(id, value);
        }
    }

    /// Clear the constraint on one column.
    pub fn clear(&mut self, column_id: &str) {
        self.by_column.remove(column_id);
    }

    /// Remove all constraints.
    pub fn clear_all(&mut self) {
        self.by_column.clear();
    }

    /// Get the current value for a column.
    #[must_use]
    pub fn get(&self, column_id: &str) -> Option<&Value> {
        self.by_column.get(column_id)
    }

    /// Whether no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_column.is_empty()
    }

    /// Iterate active constraints.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.by_column.iter()
    }
}

/// Global free-text search over a configurable field set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text term; empty means no search
    pub term: String,
    /// Fields searched; `None` searches every text-valued field
    pub fields: Option<Vec<String>>,
}

impl SearchQuery {
    /// Create a search over the default field set.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            fields: None,
        }
    }

    /// Restrict the search to the given fields.
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the search imposes no constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    fn matches(&self, row: &Row) -> bool {
        let term = self.term.to_lowercase();
        match &self.fields {
            Some(fields) => fields
                .iter()
                .any(|f| row.value(f).display().to_lowercase().contains(&term)),
            // Default field set: every text-valued cell.
            None => row.cells.values().any(|v| {
                matches!(v, Value::Text(_)) && v.display().to_lowercase().contains(&term)
            }),
        }
    }
}

/// Whether one cell value satisfies one filter constraint.
fn cell_matches(kind: FilterKind, cell: &Value, wanted: &Value) -> bool {
    match kind {
        FilterKind::Text => cell
            .display()
            .to_lowercase()
            .contains(&wanted.display().to_lowercase()),
        FilterKind::Select => cell.display() == wanted.display(),
        FilterKind::Number => match (cell.as_number(), wanted.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        FilterKind::Date => match (cell.as_date(), wanted.as_date()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        FilterKind::Checkbox => match (cell.as_bool(), wanted.as_bool()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Apply per-column filters and the global search to a row set.
///
/// All active constraints combine with logical AND. Constraints naming an
/// unknown column are ignored. Side effects: none.
#[must_use]
pub fn filter(
    rows: &[Row],
    columns: &[ColumnSpec],
    state: &FilterState,
    search: &SearchQuery,
) -> Vec<Row> {
    if state.is_empty() && search.is_empty() {
        return rows.to_vec();
    }
    let active: Vec<(&ColumnSpec, &Value)> = state
        .iter()
        .filter_map(|(id, value)| columns.iter().find(|c| &c.id == id).map(|c| (c, value)))
        .collect();
    let kept: Vec<Row> = rows
        .iter()
        .filter(|row| {
            active
                .iter()
                .all(|(col, wanted)| cell_matches(col.filter_kind, &col.value_for(row), wanted))
                && (search.is_empty() || search.matches(row))
        })
        .cloned()
        .collect();
    tracing::trace!(
        total = rows.len(),
        kept = kept.len(),
        constraints = active.len(),
        "filter applied"
    );
    kept
}
