use std::collections::BTreeSet;

use crate::{MenuItem, SectionKey};

/// Session-local presentation state of the navigation rail.
///
/// The rail starts collapsed to icons with every section closed. Nothing here
/// is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationUiState {
    collapsed: bool,
    expanded: BTreeSet<SectionKey>,
}

impl Default for NavigationUiState {
    fn default() -> Self {
        Self {
            collapsed: true,
            expanded: BTreeSet::new(),
        }
    }
}

impl NavigationUiState {
    /// Creates the initial collapsed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands the rail while the pointer is over it.
    pub fn pointer_enter(&mut self) {
        self.collapsed = false;
    }

    /// Collapses the rail when the pointer leaves it.
    pub fn pointer_leave(&mut self) {
        self.collapsed = true;
    }

    /// Flips the rail from the header button.
    ///
    /// Collapsing this way also closes every open section.
    pub fn toggle_rail(&mut self) {
        if !self.collapsed {
            self.expanded.clear();
        }
        self.collapsed = !self.collapsed;
    }

    /// Handles a click on a section header.
    pub fn click_section(&mut self, key: SectionKey) {
        if self.collapsed {
            self.collapsed = false;
            self.expanded.insert(key);
            return;
        }

        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
    }

    /// Expands the rail and opens the section holding the current route.
    ///
    /// Returns whether a section matched. Other sections keep their state.
    pub fn reveal_route(&mut self, items: &[MenuItem], current_path: &str) -> bool {
        let active = items
            .iter()
            .filter(|item| is_parent_active(item, current_path))
            .find_map(MenuItem::key);

        match active {
            Some(key) => {
                self.collapsed = false;
                self.expanded.insert(key);
                true
            }
            None => false,
        }
    }

    /// Returns whether the rail shows icons only.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Returns whether a section is marked open.
    #[must_use]
    pub fn is_expanded(&self, key: SectionKey) -> bool {
        self.expanded.contains(&key)
    }

    /// Returns whether titles and chevrons are drawn.
    #[must_use]
    pub fn shows_labels(&self) -> bool {
        !self.collapsed
    }

    /// Returns whether the children of a section are listed.
    #[must_use]
    pub fn shows_children(&self, key: SectionKey) -> bool {
        !self.collapsed && self.is_expanded(key)
    }
}

/// Returns whether a link entry points at the current route.
#[must_use]
pub fn is_active_link(item: &MenuItem, current_path: &str) -> bool {
    item.path() == Some(current_path)
}

/// Returns whether any child of a group points at the current route.
#[must_use]
pub fn is_parent_active(item: &MenuItem, current_path: &str) -> bool {
    item.children()
        .iter()
        .any(|child| is_active_link(child, current_path))
}
