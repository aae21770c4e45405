//! Pagination math and bounds validation for the browse view.
//!
//! Pages are 1-based. `total_pages == 0` means "no results yet", in which
//! case only page 1 is a valid target.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default number of attraction cards per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Compute the page count for a server-reported total.
///
/// Ceiling division; zero results (or a zero page size) yield zero pages.
pub fn total_pages_for(total_count: u64, page_size: u32) -> u32 {
    if total_count == 0 || page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size as u64) as u32
}

/// Current page / page count for one browse view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
    page_size: u32,
}

impl Pagination {
    /// Start at page 1 with an unknown page count.
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            page_size,
        }
    }

    /// The current 1-based page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Page count from the last server response (0 until known).
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Items requested per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based item offset of the current page.
    pub fn offset(&self) -> u64 {
        (self.current_page as u64 - 1) * self.page_size as u64
    }

    /// Navigate to page `n`.
    ///
    /// Rejects `n == 0` and, once a page count is known, any `n` beyond
    /// it; the state is unchanged on rejection. When `total_pages == 0`
    /// only page 1 is valid.
    pub fn go_to_page(&mut self, n: u32) -> Result<(), CoreError> {
        if n == 0 {
            return Err(CoreError::Validation(
                "Page numbers are 1-based".to_string(),
            ));
        }
        if self.total_pages == 0 {
            if n != 1 {
                return Err(CoreError::Validation(format!(
                    "Page {n} is out of range: no results"
                )));
            }
        } else if n > self.total_pages {
            return Err(CoreError::Validation(format!(
                "Page {n} is out of range: only {} page(s) available",
                self.total_pages
            )));
        }
        self.current_page = n;
        Ok(())
    }

    /// Update the page count from a server-reported total item count.
    pub fn set_total_from_server(&mut self, total_count: u64) {
        self.total_pages = total_pages_for(total_count, self.page_size);
    }

    /// Set the page count directly when the server reports it verbatim.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
    }

    /// Jump back to page 1 (used when the filter set changes).
    pub fn reset_to_first_page(&mut self) {
        self.current_page = 1;
    }

    /// Restore a persisted page without bounds checking.
    ///
    /// Used on mount, before any page count is known. Zero or absent
    /// persisted values fall back to page 1.
    pub fn restore_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
