//! Render-ready view state published by the browse controller.
//!
//! Consumers (the card grid, the CLI, tests) subscribe to snapshots and
//! re-render on every change. Failures and empty results are distinct
//! states with distinct user-visible messages; a successful response
//! always replaces any prior error state. Consumers should scroll back
//! to the top whenever `page` changes between snapshots.

use bbsr_core::display::DisplayRecord;
use bbsr_core::filter::FilterState;
use bbsr_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Message shown when a query succeeds but matches nothing.
pub const MSG_NO_RESULTS: &str = "No attractions found. Try a different search or category.";

/// Message shown when a query fails outright.
pub const MSG_FETCH_FAILED: &str = "Failed to load attractions. Please try again later.";

/// Where the view currently stands in the fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "message")]
pub enum ViewStatus {
    /// Nothing dispatched yet.
    Idle,
    /// A query is in flight.
    Loading,
    /// The last query succeeded with at least one record.
    Ready,
    /// The last query succeeded but matched nothing.
    Empty,
    /// The last query failed; carries the user-visible message.
    Failed(String),
}

/// One immutable snapshot of everything a renderer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    /// Normalized records in server order.
    pub records: Vec<DisplayRecord>,
    /// Current 1-based page.
    pub page: u32,
    /// Page count from the last response (0 until known).
    pub total_pages: u32,
    /// Fetch-cycle status.
    pub status: ViewStatus,
    /// The filter combination this snapshot reflects.
    pub filter: FilterState,
    /// When the last fetch completed (success or failure); `None` until
    /// the first response arrives.
    pub fetched_at: Option<Timestamp>,
}

impl ViewState {
    /// The pre-first-fetch state.
    pub fn initial(page: u32) -> Self {
        Self {
            records: Vec::new(),
            page,
            total_pages: 0,
            status: ViewStatus::Idle,
            filter: FilterState::default(),
            fetched_at: None,
        }
    }

    /// The user-visible message for this state, if any.
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            ViewStatus::Empty => Some(MSG_NO_RESULTS),
            ViewStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
