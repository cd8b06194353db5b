//! Search and category-filter state for the tools section.
//!
//! Search and the category filter are mutually resetting: submitting a
//! search snaps the filter back to "all", and picking a category clears the
//! query. Typing alone only updates the query; the reset happens on the
//! explicit search action.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use crate::catalog::{self, CategoryMatch, FILTER_ALL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolsState {
    pub query: String,
    pub active_filter: String,
}

impl Default for ToolsState {
    fn default() -> Self {
        Self {
            query: String::new(),
            active_filter: FILTER_ALL.to_owned(),
        }
    }
}

impl ToolsState {
    /// Update the live query text without touching the filter.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_owned();
    }

    /// Explicit search action (Enter key or Search button): the category
    /// filter resets to "all".
    pub fn submit_search(&mut self) {
        self.active_filter = FILTER_ALL.to_owned();
    }

    /// Select a category filter button, clearing any active query.
    pub fn select_filter(&mut self, category_id: &str) {
        self.active_filter = category_id.to_owned();
        self.query.clear();
    }

    /// Run the current query/filter pair over the catalog.
    pub fn matches(&self) -> Vec<CategoryMatch> {
        catalog::filter_catalog(&self.query, &self.active_filter)
    }
}
