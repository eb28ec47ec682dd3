//! Column descriptors: how to extract a value from a row and which
//! interactive features the column participates in.

use crate::row::Row;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Default width for columns without an explicit width.
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

/// Minimum column width enforced during resize.
pub const MIN_COLUMN_WIDTH: f32 = 50.0;

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Edge a fixed column is pinned to during horizontal scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedSide {
    Left,
    Right,
}

/// How a column's filter input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterKind {
    /// Case-insensitive substring containment
    #[default]
    Text,
    /// Exact equality
    Select,
    /// Numeric equality after coercion
    Number,
    /// Date-only equality
    Date,
    /// Boolean truthiness match
    Checkbox,
}

/// A caller-supplied pure accessor deriving a cell value from a row.
///
/// Must be side-effect free: the engine calls it repeatedly during
/// filtering and sorting.
#[derive(Clone)]
pub struct CellFn(Arc<dyn Fn(&Row) -> Value + Send + Sync>);

impl CellFn {
    /// Wrap an accessor function.
    pub fn new(f: impl Fn(&Row) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the accessor to a row.
    #[must_use]
    pub fn apply(&self, row: &Row) -> Value {
        (self.0)(row)
    }
}

impl fmt::Debug for CellFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellFn")
    }
}

/// Column descriptor.
///
/// `id` is stable across reorders and resizes and must be unique within a
/// column set; duplicates are not validated. Width and visibility mutate
/// only through [`crate::layout::ColumnLayout`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Unique column id (doubles as the accessed field name unless a
    /// computed accessor is set)
    pub id: String,
    /// Display header
    pub label: String,
    /// Field read from the row (defaults to `id`)
    pub field: String,
    /// Computed accessor overriding the field lookup
    #[serde(skip)]
    pub computed: Option<CellFn>,
    /// Whether the column participates in sorting
    pub sortable: bool,
    /// Whether the column participates in per-column filtering
    pub filterable: bool,
    /// Filter input interpretation
    pub filter_kind: FilterKind,
    /// Whether the column participates in interactive resize
    pub resizable: bool,
    /// Edge anchor for sticky columns
    pub fixed: Option<FixedSide>,
    /// Current width in pixels
    pub width: f32,
    /// Visibility flag
    pub hidden: bool,
    /// Text alignment
    pub align: TextAlign,
}

impl ColumnSpec {
    /// Create a new column.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            field: id.clone(),
            id,
            label: label.into(),
            computed: None,
            sortable: false,
            filterable: false,
            filter_kind: FilterKind::default(),
            resizable: false,
            fixed: None,
            width: DEFAULT_COLUMN_WIDTH,
            hidden: false,
            align: TextAlign::default(),
        }
    }

    /// Read from a different field than the column id.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Derive the cell value with a function instead of a field lookup.
    #[must_use]
    pub fn computed(mut self, f: impl Fn(&Row) -> Value + Send + Sync + 'static) -> Self {
        self.computed = Some(CellFn::new(f));
        self
    }

    /// Make the column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column filterable with the given filter kind.
    #[must_use]
    pub const fn filterable(mut self, kind: FilterKind) -> Self {
        self.filterable = true;
        self.filter_kind = kind;
        self
    }

    /// Make the column resizable.
    #[must_use]
    pub const fn resizable(mut self) -> Self {
        self.resizable = true;
        self
    }

    /// Pin the column to an edge.
    #[must_use]
    pub const fn fixed(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Set the initial width, clamped to the minimum.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width.max(MIN_COLUMN_WIDTH);
        self
    }

    /// Hide the column initially.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Set text alignment.
    #[must_use]
    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Extract this column's value from a row.
    ///
    /// Missing fields yield [`Value::Empty`]: they sort last and never
    /// match a filter.
    #[must_use]
    pub fn value_for(&self, row: &Row) -> Value {
        match &self.computed {
            Some(f) => f.apply(row),
            None => row.value(&self.field),
        }
    }
}
