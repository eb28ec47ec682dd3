//! Search bar state model with debounced term propagation.

use gridkit_core::{Debouncer, SearchChanged, SearchQuery};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Default quiet window before a term propagates.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Search input state.
///
/// Keystrokes land in [`SearchBar::input`]; the debounced term is
/// released by [`SearchBar::poll`] (or [`SearchBar::submit`] for an
/// explicit enter-key flush). Debouncing lives here, not in the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBar {
    /// The text currently in the input
    term: String,
    /// Placeholder shown when empty
    placeholder: String,
    /// Fields the engine should search; `None` means the default set
    searchable_fields: Option<Vec<String>>,
    #[serde(skip, default = "default_debouncer")]
    debouncer: Debouncer<String>,
}

fn default_debouncer() -> Debouncer<String> {
    Debouncer::new(DEFAULT_DEBOUNCE)
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    /// Create a search bar with the default debounce window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: String::new(),
            placeholder: "Search...".to_string(),
            searchable_fields: None,
            debouncer: default_debouncer(),
        }
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Restrict the search to specific fields.
    #[must_use]
    pub fn searchable_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.searchable_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the quiet window.
    #[must_use]
    pub fn debounce(mut self, window: Duration) -> Self {
        self.debouncer = Debouncer::new(window);
        self
    }

    /// The text currently in the input.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The placeholder text.
    #[must_use]
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    /// Record a keystroke's worth of input at the given time.
    pub fn input(&mut self, term: impl Into<String>, at: Instant) {
        self.term = term.into();
        self.debouncer.submit(self.term.clone(), at);
    }

    /// Release the pending term if the quiet window has elapsed.
    pub fn poll(&mut self, at: Instant) -> Option<SearchChanged> {
        self.debouncer
            .poll(at)
            .map(|term| SearchChanged { term })
    }

    /// Release the pending term immediately.
    pub fn submit(&mut self) -> Option<SearchChanged> {
        self.debouncer.flush().map(|term| SearchChanged { term })
    }

    /// Clear the input and propagate the empty term immediately.
    pub fn clear(&mut self) -> SearchChanged {
        self.term.clear();
        let _ = self.debouncer.flush();
        SearchChanged {
            term: String::new(),
        }
    }

    /// The engine-side query for the current term.
    #[must_use]
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            term: self.term.clone(),
            fields: self.searchable_fields.clone(),
        }
    }
}
