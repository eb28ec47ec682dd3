//! Tabs state model for tabbed navigation.

use serde::{Deserialize, Serialize};

/// A single tab definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Tab ID
    pub id: String,
    /// Tab label
    pub label: String,
    /// Whether tab is disabled
    pub disabled: bool,
    /// Optional icon name
    pub icon: Option<String>,
}

impl Tab {
    /// Create a new tab.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
            icon: None,
        }
    }

    /// Set the tab as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set an icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Message emitted when the active tab changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChanged {
    /// ID of the newly active tab
    pub tab_id: String,
    /// Index of the newly active tab
    pub index: usize,
}

/// Tabs state for tabbed navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tabs {
    /// Tab definitions
    items: Vec<Tab>,
    /// Active tab index
    active: usize,
}

impl Tabs {
    /// Create a new tabs state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tab.
    #[must_use]
    pub fn tab(mut self, tab: Tab) -> Self {
        self.items.push(tab);
        self
    }

    /// Add multiple tabs.
    #[must_use]
    pub fn tabs(mut self, tabs: impl IntoIterator<Item = Tab>) -> Self {
        self.items.extend(tabs);
        self
    }

    /// Set the active tab by index.
    #[must_use]
    pub const fn active(mut self, index: usize) -> Self {
        self.active = index;
        self
    }

    /// Set the active tab by ID.
    #[must_use]
    pub fn active_id(mut self, id: &str) -> Self {
        if let Some(index) = self.items.iter().position(|t| t.id == id) {
            self.active = index;
        }
        self
    }

    /// Get tab count.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.items.len()
    }

    /// Get the tabs.
    #[must_use]
    pub fn get_tabs(&self) -> &[Tab] {
        &self.items
    }

    /// Get active tab index.
    #[must_use]
    pub const fn get_active(&self) -> usize {
        self.active
    }

    /// Get active tab.
    #[must_use]
    pub fn get_active_tab(&self) -> Option<&Tab> {
        self.items.get(self.active)
    }

    /// Get active tab ID.
    #[must_use]
    pub fn get_active_id(&self) -> Option<&str> {
        self.items.get(self.active).map(|t| t.id.as_str())
    }

    /// Check if a tab is active.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Check if tabs are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Activate a tab by index. Disabled tabs, out-of-range indices and
    /// the already-active tab are rejected.
    pub fn activate(&mut self, index: usize) -> Option<TabChanged> {
        let tab = self.items.get(index)?;
        if tab.disabled || index == self.active {
            return None;
        }
        self.active = index;
        Some(TabChanged {
            tab_id: tab.id.clone(),
            index,
        })
    }

    /// Activate a tab by ID.
    pub fn activate_id(&mut self, id: &str) -> Option<TabChanged> {
        let index = self.items.iter().position(|t| t.id == id)?;
        self.activate(index)
    }

    /// Activate the next enabled tab, wrapping.
    pub fn next_tab(&mut self) -> Option<TabChanged> {
        self.step_tab(1)
    }

    /// Activate the previous enabled tab, wrapping.
    pub fn prev_tab(&mut self) -> Option<TabChanged> {
        self.step_tab(-1)
    }

    fn step_tab(&mut self, step: isize) -> Option<TabChanged> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let mut index = self.active;
        for _ in 0..len {
            index = (index as isize + step).rem_euclid(len as isize) as usize;
            if let Some(msg) = self.activate(index) {
                return Some(msg);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Tab Tests =====

    #[test]
    fn test_tab_new() {
        let tab = Tab::new("home", "Home");
        assert_eq!(tab.id, "home");
        assert_eq!(tab.label, "Home");
        assert!(!tab.disabled);
        assert!(tab.icon.is_none());
    }

    #[test]
    fn test_tab_disabled() {
        let tab = Tab::new("settings", "Settings").disabled();
        assert!(tab.disabled);
    }

    #[test]
    fn test_tab_icon() {
        let tab = Tab::new("profile", "Profile").icon("user");
        assert_eq!(tab.icon, Some("user".to_string()));
    }

    // ===== Tabs Construction Tests =====

    #[test]
    fn test_tabs_new() {
        let tabs = Tabs::new();
        assert_eq!(tabs.tab_count(), 0);
        assert!(tabs.is_empty());
        assert!(tabs.get_active_tab().is_none());
    }

    #[test]
    fn test_tabs_builder() {
        let tabs = Tabs::new()
            .tab(Tab::new("home", "Home"))
            .tab(Tab::new("about", "About"))
            .tab(Tab::new("contact", "Contact"))
            .active(1);

        assert_eq!(tabs.tab_count(), 3);
        assert_eq!(tabs.get_active(), 1);
        assert_eq!(tabs.get_active_id(), Some("about"));
        assert!(tabs.is_active(1));
        assert!(!tabs.is_active(0));
    }

    #[test]
    fn test_tabs_multiple() {
        let tab_list = vec![Tab::new("a", "A"), Tab::new("b", "B"), Tab::new("c", "C")];
        let tabs = Tabs::new().tabs(tab_list);
        assert_eq!(tabs.tab_count(), 3);
    }

    #[test]
    fn test_tabs_active_id() {
        let tabs = Tabs::new()
            .tab(Tab::new("first", "First"))
            .tab(Tab::new("second", "Second"))
            .active_id("second");

        assert_eq!(tabs.get_active(), 1);
    }

    #[test]
    fn test_tabs_active_id_not_found() {
        let tabs = Tabs::new()
            .tab(Tab::new("first", "First"))
            .active_id("nonexistent");

        assert_eq!(tabs.get_active(), 0);
    }

    // ===== Activation Tests =====

    #[test]
    fn test_tabs_activate() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B"))
            .tab(Tab::new("c", "C"));

        let msg = tabs.activate(2).unwrap();
        assert_eq!(msg.tab_id, "c");
        assert_eq!(msg.index, 2);
        assert_eq!(tabs.get_active(), 2);
    }

    #[test]
    fn test_tabs_activate_out_of_bounds() {
        let mut tabs = Tabs::new().tab(Tab::new("a", "A")).tab(Tab::new("b", "B"));

        assert!(tabs.activate(10).is_none());
        assert_eq!(tabs.get_active(), 0);
    }

    #[test]
    fn test_tabs_activate_disabled() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B").disabled());

        assert!(tabs.activate(1).is_none());
        assert_eq!(tabs.get_active(), 0);
    }

    #[test]
    fn test_tabs_activate_current_no_message() {
        let mut tabs = Tabs::new().tab(Tab::new("a", "A")).tab(Tab::new("b", "B"));

        assert!(tabs.activate(0).is_none());
    }

    #[test]
    fn test_tabs_activate_id() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("home", "Home"))
            .tab(Tab::new("settings", "Settings"));

        let msg = tabs.activate_id("settings").unwrap();
        assert_eq!(msg.index, 1);
        assert!(tabs.activate_id("missing").is_none());
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_tabs_next_tab() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B"))
            .tab(Tab::new("c", "C"));

        tabs.next_tab();
        assert_eq!(tabs.get_active(), 1);

        tabs.next_tab();
        assert_eq!(tabs.get_active(), 2);

        tabs.next_tab(); // Wrap around
        assert_eq!(tabs.get_active(), 0);
    }

    #[test]
    fn test_tabs_next_tab_skip_disabled() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B").disabled())
            .tab(Tab::new("c", "C"));

        tabs.next_tab();
        assert_eq!(tabs.get_active(), 2); // Skipped disabled tab
    }

    #[test]
    fn test_tabs_prev_tab() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B"))
            .tab(Tab::new("c", "C"))
            .active(2);

        tabs.prev_tab();
        assert_eq!(tabs.get_active(), 1);

        tabs.prev_tab();
        assert_eq!(tabs.get_active(), 0);

        tabs.prev_tab(); // Wrap around
        assert_eq!(tabs.get_active(), 2);
    }

    #[test]
    fn test_tabs_prev_tab_skip_disabled() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B").disabled())
            .tab(Tab::new("c", "C"))
            .active(2);

        tabs.prev_tab();
        assert_eq!(tabs.get_active(), 0); // Skipped disabled tab
    }

    #[test]
    fn test_tabs_next_all_disabled_stays_put() {
        let mut tabs = Tabs::new()
            .tab(Tab::new("a", "A"))
            .tab(Tab::new("b", "B").disabled());

        // Only the active tab is enabled, so there is nowhere to go.
        assert!(tabs.next_tab().is_none());
        assert_eq!(tabs.get_active(), 0);
    }
}
