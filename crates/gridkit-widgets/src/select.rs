//! Select/dropdown state model with typeahead option filtering.

use serde::{Deserialize, Serialize};

/// A selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value for this option
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether this option is disabled
    pub disabled: bool,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Create an option where value equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: text.clone(),
            label: text,
            disabled: false,
        }
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Message emitted when selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// The newly selected value (None if cleared)
    pub value: Option<String>,
    /// Index of the selected option in the full option list
    pub index: Option<usize>,
}

/// Select/dropdown state.
///
/// Owns only interaction state (open, selected, hovered, typeahead
/// query); rendering and positioning belong to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Select {
    /// Available options
    options: Vec<SelectOption>,
    /// Currently selected index (None for no selection)
    selected: Option<usize>,
    /// Placeholder text when nothing selected
    placeholder: String,
    /// Whether the dropdown is currently open
    #[serde(skip)]
    open: bool,
    /// Whether the widget is disabled
    disabled: bool,
    /// Typeahead query narrowing the visible options
    #[serde(skip)]
    query: String,
    /// Currently hovered index into the full option list
    #[serde(skip)]
    hovered: Option<usize>,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    /// Create a new select.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            selected: None,
            placeholder: "Select...".to_string(),
            open: false,
            disabled: false,
            query: String::new(),
            hovered: None,
        }
    }

    /// Add an option.
    #[must_use]
    pub fn option(mut self, opt: SelectOption) -> Self {
        self.options.push(opt);
        self
    }

    /// Add multiple options.
    #[must_use]
    pub fn options(mut self, opts: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(opts);
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the dropdown. Disabled widgets stay closed; closing
    /// clears the typeahead query and hover.
    pub fn set_open(&mut self, open: bool) {
        if self.disabled {
            return;
        }
        self.open = open;
        if !open {
            self.query.clear();
            self.hovered = None;
        }
    }

    /// Toggle the dropdown.
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Set the typeahead query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.hovered = None;
    }

    /// Options matching the typeahead query, with their indices into the
    /// full list. Matching is case-insensitive on the label.
    #[must_use]
    pub fn visible_options(&self) -> Vec<(usize, &SelectOption)> {
        let query = self.query.to_lowercase();
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| query.is_empty() || o.label.to_lowercase().contains(&query))
            .collect()
    }

    /// The selected option, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// The selected index, if any.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Display text for the closed control.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.selected_option()
            .map_or(self.placeholder.as_str(), |o| o.label.as_str())
    }

    /// Select by index into the full option list. Returns the message, or
    /// `None` for out-of-range or disabled options. Selecting closes the
    /// dropdown.
    pub fn select_index(&mut self, index: usize) -> Option<SelectionChanged> {
        let opt = self.options.get(index)?;
        if opt.disabled {
            return None;
        }
        let value = opt.value.clone();
        self.selected = Some(index);
        self.set_open(false);
        Some(SelectionChanged {
            value: Some(value),
            index: Some(index),
        })
    }

    /// Select by option value.
    pub fn select_value(&mut self, value: &str) -> Option<SelectionChanged> {
        let index = self.options.iter().position(|o| o.value == value)?;
        self.select_index(index)
    }

    /// Clear the selection.
    pub fn clear(&mut self) -> SelectionChanged {
        self.selected = None;
        SelectionChanged {
            value: None,
            index: None,
        }
    }

    /// Move hover to the next visible, enabled option (wrapping).
    pub fn hover_next(&mut self) {
        self.move_hover(1);
    }

    /// Move hover to the previous visible, enabled option (wrapping).
    pub fn hover_prev(&mut self) {
        self.move_hover(-1);
    }

    fn move_hover(&mut self, step: isize) {
        let candidates: Vec<usize> = self
            .visible_options()
            .into_iter()
            .filter(|(_, o)| !o.disabled)
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            self.hovered = None;
            return;
        }
        let pos = self
            .hovered
            .and_then(|h| candidates.iter().position(|&i| i == h));
        let next = match pos {
            Some(p) => {
                let len = candidates.len() as isize;
                ((p as isize + step).rem_euclid(len)) as usize
            }
            None if step >= 0 => 0,
            None => candidates.len() - 1,
        };
        self.hovered = Some(candidates[next]);
    }

    /// The hovered index, if any.
    #[must_use]
    pub const fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    /// Commit the hovered option as the selection.
    pub fn commit_hovered(&mut self) -> Option<SelectionChanged> {
        self.hovered.and_then(|i| self.select_index(i))
    }
}
