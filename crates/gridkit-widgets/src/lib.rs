//! Widget state models for the Gridkit tabular view engine.
//!
//! Each module owns the interaction state of one control: what is open,
//! selected, hovered or pending. Rendering belongs to the host; the
//! models emit plain message structs when something changes, several of
//! them reusing the [`gridkit_core`] event types so a table view can
//! consume them directly.

pub mod calendar;
pub mod pager;
pub mod search_bar;
pub mod select;
pub mod tabs;
pub mod toast;

pub use calendar::{
    Calendar, CalendarMode, DateSelected, DateSelection, DayCell, MonthGrid, QuickRange,
};
pub use pager::{PageItem, Pager, DEFAULT_SIBLING_COUNT};
pub use search_bar::{SearchBar, DEFAULT_DEBOUNCE};
pub use select::{Select, SelectOption, SelectionChanged};
pub use tabs::{Tab, TabChanged, Tabs};
pub use toast::{
    ActiveToast, Toast, ToastLevel, ToastQueue, DEFAULT_MAX_TOASTS, DEFAULT_TOAST_DURATION,
};
