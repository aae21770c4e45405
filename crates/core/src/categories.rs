//! Attraction category constants and helpers.
//!
//! Categories are the coarse "type" facet of the browse filter. The set
//! mirrors the attraction taxonomy served by the guide API.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

/// Temples and religious sites.
pub const CATEGORY_TEMPLE: &str = "temple";
/// Museums and galleries.
pub const CATEGORY_MUSEUM: &str = "museum";
/// Parks and gardens.
pub const CATEGORY_PARK: &str = "park";
/// Monuments and heritage structures.
pub const CATEGORY_MONUMENT: &str = "monument";
/// Lakes and waterfronts.
pub const CATEGORY_LAKE: &str = "lake";
/// Markets and bazaars.
pub const CATEGORY_MARKET: &str = "market";
/// Anything that does not fit the categories above.
pub const CATEGORY_OTHER: &str = "other";

/// All valid attraction categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_TEMPLE,
    CATEGORY_MUSEUM,
    CATEGORY_PARK,
    CATEGORY_MONUMENT,
    CATEGORY_LAKE,
    CATEGORY_MARKET,
    CATEGORY_OTHER,
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Check whether a category tag is one of the known categories.
pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

/// Validate that a category tag is one of the known categories.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if is_valid_category(category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown category: '{category}'. Valid categories: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

/// Normalize user input into a category tag.
///
/// Trims whitespace and lowercases. Returns `None` for empty or
/// whitespace-only input.
pub fn normalize_category(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
