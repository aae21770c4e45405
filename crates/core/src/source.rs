//! The attraction source seam queried by the browse engine.
//!
//! [`AttractionSource`] abstracts over the guide API so the engine can be
//! driven by the real HTTP client in production and by a scripted mock in
//! tests. One query fetches one page of raw records plus the totals
//! needed for pagination.

use async_trait::async_trait;
use serde::Deserialize;

use crate::display::RawAttraction;
use crate::filter::QuerySelector;
use crate::pagination::total_pages_for;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// One outbound page query, derived from the filter and pagination state.
///
/// Created fresh on every filter/page change and immutable once
/// dispatched. The selector carries at most one of the category / name
/// filters, per the precedence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttractionQuery {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// The authoritative filter for this query.
    pub selector: QuerySelector,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// One page of raw records plus server-reported totals.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttractionPage {
    /// Records in server order.
    #[serde(default)]
    pub items: Vec<RawAttraction>,

    /// Total matching records across all pages.
    #[serde(default)]
    pub total: u64,

    /// Explicit page count, when the server provides one.
    #[serde(default, alias = "totalPages")]
    pub total_pages: Option<u32>,
}

impl AttractionPage {
    /// The effective page count: the server's explicit `totalPages` when
    /// present, otherwise derived from `total` and the page size.
    pub fn resolved_total_pages(&self, page_size: u32) -> u32 {
        self.total_pages
            .unwrap_or_else(|| total_pages_for(self.total, page_size))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors a source can produce while fetching a page.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// The request itself failed (network, DNS, TLS, etc.).
    #[error("Request failed: {0}")]
    Request(String),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A provider of attraction pages.
#[async_trait]
pub trait AttractionSource: Send + Sync {
    /// Fetch one page of attractions matching `query`.
    async fn fetch_page(&self, query: &AttractionQuery) -> Result<AttractionPage, SourceError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
