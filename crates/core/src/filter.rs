//! Filter state and precedence resolution for the attraction browse view.
//!
//! [`FilterState`] is the single source of truth for the active filter
//! combination. The category facet and the free-text search are mutually
//! exclusive: whichever was set most recently "wins", tracked by the
//! [`Precedence`] flag. Setters return a [`FilterChange`] telling the
//! engine how the resulting query should be dispatched.

use serde::{Deserialize, Serialize};

use crate::categories::normalize_category;

/// Default sort key sent with every query.
pub const DEFAULT_SORT_KEY: &str = "name";

// ---------------------------------------------------------------------------
// Precedence
// ---------------------------------------------------------------------------

/// Which filter facet is authoritative for the outbound query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    /// The category facet was set most recently.
    Category,
    /// The free-text search was set most recently.
    Search,
    /// Neither facet is populated.
    None,
}

// ---------------------------------------------------------------------------
// Dispatch mode
// ---------------------------------------------------------------------------

/// How a filter mutation should reach the network.
///
/// Free-text edits are rate-limited behind a quiet period; everything
/// else (category, clears, pagination) dispatches immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    Immediate,
    Debounced,
}

/// Outcome of a filter mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChange {
    /// How the follow-up query should be dispatched.
    pub dispatch: DispatchMode,
}

// ---------------------------------------------------------------------------
// Query selector
// ---------------------------------------------------------------------------

/// The authoritative filter derived from [`FilterState`] for one query.
///
/// At most one of the category / name variants is ever produced, per the
/// precedence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySelector {
    /// Filter by attraction category.
    Category(String),
    /// Filter by free-text name search.
    Name(String),
    /// No filter; list everything.
    All,
}

// ---------------------------------------------------------------------------
// FilterState
// ---------------------------------------------------------------------------

/// The active filter combination for one browse view instance.
///
/// All inputs are treated as best-effort strings: empty or whitespace-only
/// search text is equivalent to an absent search, and mutations never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    category: Option<String>,
    search_text: Option<String>,
    sort_key: String,
    precedence: Precedence,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            search_text: None,
            sort_key: DEFAULT_SORT_KEY.to_string(),
            precedence: Precedence::None,
        }
    }
}

impl FilterState {
    /// Create an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected category, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Current free-text search, if any.
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    /// Sort key sent with every query (kept for API compatibility).
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    /// Which facet is currently authoritative.
    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Select a category. Clears any free-text search and makes the
    /// category authoritative. Empty input behaves like
    /// [`clear_category`](Self::clear_category).
    pub fn set_category(&mut self, value: &str) -> FilterChange {
        match normalize_category(value) {
            Some(category) => {
                self.category = Some(category);
                self.search_text = None;
                self.precedence = Precedence::Category;
                FilterChange {
                    dispatch: DispatchMode::Immediate,
                }
            }
            None => self.clear_category(),
        }
    }

    /// Update the free-text search.
    ///
    /// Non-empty input clears the category facet and makes the search
    /// authoritative. Empty or whitespace-only input removes the search;
    /// precedence then falls back to the category if one is still
    /// selected, else to [`Precedence::None`].
    pub fn set_search_text(&mut self, value: &str) -> FilterChange {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.search_text = None;
            self.precedence = if self.category.is_some() {
                Precedence::Category
            } else {
                Precedence::None
            };
        } else {
            self.search_text = Some(trimmed.to_string());
            self.category = None;
            self.precedence = Precedence::Search;
        }
        FilterChange {
            dispatch: DispatchMode::Debounced,
        }
    }

    /// Remove the category facet, recomputing precedence from whatever
    /// remains populated.
    pub fn clear_category(&mut self) -> FilterChange {
        self.category = None;
        self.precedence = if self.search_text.is_some() {
            Precedence::Search
        } else {
            Precedence::None
        };
        FilterChange {
            dispatch: DispatchMode::Immediate,
        }
    }

    /// Remove the free-text search, recomputing precedence from whatever
    /// remains populated.
    pub fn clear_search(&mut self) -> FilterChange {
        self.search_text = None;
        self.precedence = if self.category.is_some() {
            Precedence::Category
        } else {
            Precedence::None
        };
        FilterChange {
            dispatch: DispatchMode::Immediate,
        }
    }

    /// Reset everything to defaults.
    pub fn clear_all(&mut self) -> FilterChange {
        *self = Self::default();
        FilterChange {
            dispatch: DispatchMode::Immediate,
        }
    }

    /// Derive the authoritative selector for the next outbound query.
    ///
    /// Guaranteed to produce at most one of the category / name filters.
    pub fn selector(&self) -> QuerySelector {
        match self.precedence {
            Precedence::Category => self
                .category
                .clone()
                .map(QuerySelector::Category)
                .unwrap_or(QuerySelector::All),
            Precedence::Search => self
                .search_text
                .clone()
                .map(QuerySelector::Name)
                .unwrap_or(QuerySelector::All),
            Precedence::None => QuerySelector::All,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- precedence invariant ------------------------------------------------

    #[test]
    fn at_most_one_facet_populated() {
        let mut state = FilterState::new();

        state.set_category("temple");
        assert!(state.category().is_some());
        assert!(state.search_text().is_none());

        state.set_search_text("lingaraj");
        assert!(state.category().is_none());
        assert!(state.search_text().is_some());

        state.set_category("museum");
        assert!(state.category().is_some());
        assert!(state.search_text().is_none());
    }

    #[test]
    fn selector_never_combines_facets() {
        let mut state = FilterState::new();
        state.set_category("park");
        state.set_search_text("ekamra");
        assert_eq!(
            state.selector(),
            QuerySelector::Name("ekamra".to_string())
        );
    }

    // -- set_category --------------------------------------------------------

    #[test]
    fn set_category_is_immediate_and_authoritative() {
        let mut state = FilterState::new();
        let change = state.set_category("temple");

        assert_eq!(change.dispatch, DispatchMode::Immediate);
        assert_eq!(state.precedence(), Precedence::Category);
        assert_eq!(
            state.selector(),
            QuerySelector::Category("temple".to_string())
        );
    }

    #[test]
    fn set_category_normalizes_input() {
        let mut state = FilterState::new();
        state.set_category("  Temple ");
        assert_eq!(state.category(), Some("temple"));
    }

    #[test]
    fn set_category_empty_behaves_like_clear() {
        let mut state = FilterState::new();
        state.set_category("temple");
        state.set_category("   ");
        assert!(state.category().is_none());
        assert_eq!(state.precedence(), Precedence::None);
    }

    // -- set_search_text -----------------------------------------------------

    #[test]
    fn set_search_is_debounced() {
        let mut state = FilterState::new();
        let change = state.set_search_text("lingaraj");
        assert_eq!(change.dispatch, DispatchMode::Debounced);
        assert_eq!(state.precedence(), Precedence::Search);
    }

    #[test]
    fn category_then_search_scenario() {
        let mut state = FilterState::new();
        state.set_category("temple");
        state.set_search_text("lingaraj");

        assert!(state.category().is_none());
        assert_eq!(state.precedence(), Precedence::Search);
        assert_eq!(
            state.selector(),
            QuerySelector::Name("lingaraj".to_string())
        );
    }

    #[test]
    fn whitespace_search_is_absent_search() {
        let mut state = FilterState::new();
        state.set_category("temple");
        state.set_search_text("   ");

        // The category survives an empty search edit.
        assert_eq!(state.category(), Some("temple"));
        assert_eq!(state.precedence(), Precedence::Category);
    }

    #[test]
    fn emptying_search_without_category_resets_precedence() {
        let mut state = FilterState::new();
        state.set_search_text("lingaraj");
        state.set_search_text("");
        assert_eq!(state.precedence(), Precedence::None);
        assert_eq!(state.selector(), QuerySelector::All);
    }

    #[test]
    fn search_text_is_trimmed() {
        let mut state = FilterState::new();
        state.set_search_text("  udayagiri  ");
        assert_eq!(state.search_text(), Some("udayagiri"));
    }

    // -- clears --------------------------------------------------------------

    #[test]
    fn clear_category_falls_back_to_search() {
        let mut state = FilterState::new();
        state.set_search_text("khandagiri");
        // Search wins, then the (absent) category is cleared.
        let change = state.clear_category();
        assert_eq!(change.dispatch, DispatchMode::Immediate);
        assert_eq!(state.precedence(), Precedence::Search);
    }

    #[test]
    fn clear_search_falls_back_to_category() {
        let mut state = FilterState::new();
        state.set_category("museum");
        state.clear_search();
        assert_eq!(state.precedence(), Precedence::Category);
        assert_eq!(
            state.selector(),
            QuerySelector::Category("museum".to_string())
        );
    }

    #[test]
    fn clear_when_both_empty_yields_none() {
        let mut state = FilterState::new();
        state.clear_category();
        assert_eq!(state.precedence(), Precedence::None);
        state.clear_search();
        assert_eq!(state.precedence(), Precedence::None);
    }

    #[test]
    fn clear_all_restores_defaults() {
        let mut state = FilterState::new();
        state.set_category("temple");
        state.set_search_text("lingaraj");
        state.clear_all();

        assert_eq!(state, FilterState::default());
        assert_eq!(state.sort_key(), DEFAULT_SORT_KEY);
        assert_eq!(state.selector(), QuerySelector::All);
    }
}
