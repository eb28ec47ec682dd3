//! Tabular data view engine for Gridkit.
//!
//! A pure function of (raw rows, column descriptors, interaction state) →
//! (rows to display, derived column metadata), decoupled from rendering:
//! - Rows and values: [`Row`], [`Value`], [`RowKey`]
//! - Column model: [`ColumnSpec`], [`FilterKind`], [`FixedSide`]
//! - Engines: [`filter`], [`sort`], [`paginate`]
//! - Layout: [`ColumnLayout`] with resize gestures and fixed columns
//! - Composition: [`TableView`] and [`ViewSnapshot`]
//! - Notifications: [`Bus`] carrying [`TableEvent`]s
//!
//! Data flows one direction: raw rows → filter → sort → paginate →
//! projection, with the column layout contributing presentation metadata
//! independently. All state is owned by the consumer; the engine
//! recomputes derived data whenever an input changes and degrades
//! gracefully (clamp, exclude, ignore) instead of erroring.

mod column;
mod compose;
mod debounce;
mod events;
mod filter;
mod layout;
mod page;
mod row;
mod sort;
mod value;

pub use column::{
    CellFn, ColumnSpec, FilterKind, FixedSide, TextAlign, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH,
};
pub use compose::{DisplayRow, TableView, ViewSnapshot};
pub use debounce::Debouncer;
pub use events::{
    Bus, ColumnsChanged, FilterChanged, PageChanged, PageSizeChanged, RowActivated, SearchChanged,
    SortChanged, SubscriberId, TableEvent,
};
pub use filter::{filter, FilterState, SearchQuery};
pub use layout::ColumnLayout;
pub use page::{paginate, PageState, DEFAULT_PAGE_SIZE};
pub use row::{KeyFn, Row, RowKey};
pub use sort::{sort, SortState};
pub use value::Value;
