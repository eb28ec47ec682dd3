//! Rows and row identity.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A row of data: an opaque mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Cell values by field name
    pub cells: HashMap<String, Value>,
}

impl Row {
    /// Create a new empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell value.
    #[must_use]
    pub fn cell(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(field.into(), value.into());
        self
    }

    /// Get a cell value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.cells.get(field)
    }

    /// Get a cell value, treating a missing field as [`Value::Empty`].
    #[must_use]
    pub fn value(&self, field: &str) -> Value {
        self.cells.get(field).cloned().unwrap_or(Value::Empty)
    }
}

/// A caller-supplied pure function deriving a key string from a row.
#[derive(Clone)]
pub struct KeyFn(Arc<dyn Fn(&Row) -> String + Send + Sync>);

impl KeyFn {
    /// Wrap a key function.
    pub fn new(f: impl Fn(&Row) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the function to a row.
    #[must_use]
    pub fn apply(&self, row: &Row) -> String {
        (self.0)(row)
    }
}

impl fmt::Debug for KeyFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyFn")
    }
}

/// How to derive a stable identity for a row during re-render.
///
/// If the chosen field or function does not uniquely identify rows,
/// duplicate keys are possible; the engine does not guard against that.
#[derive(Debug, Clone)]
pub enum RowKey {
    /// Use the named field's display text as the key
    Field(String),
    /// Use a caller-supplied function
    Func(KeyFn),
}

impl RowKey {
    /// Derive the key for a row.
    #[must_use]
    pub fn key_of(&self, row: &Row) -> String {
        match self {
            Self::Field(field) => row.value(field).display(),
            Self::Func(f) => f.apply(row),
        }
    }
}

impl Default for RowKey {
    fn default() -> Self {
        Self::Field("id".to_string())
    }
}
