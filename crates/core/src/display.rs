//! Raw record to display record normalization.
//!
//! The guide API returns records with optional or missing fields
//! throughout. All defaulting happens here, in one place, so render code
//! never has to reason about absent data:
//!
//! - empty or blank image lists become a single placeholder URL;
//! - names present in the curated-image map get that list verbatim;
//! - missing text fields get documented defaults;
//! - descriptions are stripped of markdown delimiters.
//!
//! Normalization is total (never errors) and idempotent.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::sanitize::strip_markdown;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Placeholder shown when a record has no usable image.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x300?text=Bhubaneswar";

/// Default location text for records missing one.
pub const DEFAULT_LOCATION: &str = "Location not available";

/// Default visit duration for records missing one.
pub const DEFAULT_VISIT_DURATION: &str = "1-2 hours";

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// An attraction record as returned by the guide API.
///
/// Every field the server may omit is an explicit `Option` (or defaults
/// to empty); deserialization is tolerant of missing fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAttraction {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, alias = "ratingAverage")]
    pub rating_average: Option<f64>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, alias = "visitDuration")]
    pub visit_duration: Option<String>,
}

// ---------------------------------------------------------------------------
// Curated images
// ---------------------------------------------------------------------------

/// Preloaded map of curated image lists keyed by attraction name.
///
/// When a record's name appears here, the curated list is used verbatim,
/// taking precedence over the record's own images.
#[derive(Debug, Clone, Default)]
pub struct CuratedImages {
    by_name: HashMap<String, Vec<String>>,
}

impl CuratedImages {
    /// Empty map; every record keeps its own images.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(name, images)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            by_name: entries.into_iter().collect(),
        }
    }

    /// Curated images for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.by_name.get(name).map(Vec::as_slice)
    }
}

// ---------------------------------------------------------------------------
// Display record
// ---------------------------------------------------------------------------

/// A normalized, render-safe projection of a [`RawAttraction`].
///
/// `images` is never empty after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub id: String,
    pub name: String,
    pub images: Vec<String>,
    pub location: String,
    pub description: String,
    pub rating_average: f64,
    pub tags: Vec<String>,
    pub visit_duration: String,
}

/// Normalize one raw record into a display record.
///
/// Malformed or missing fields never error; absence is treated as
/// empty-equivalent and substituted with the documented default.
pub fn normalize(raw: &RawAttraction, curated: &CuratedImages) -> DisplayRecord {
    let name = raw.name.clone().unwrap_or_default();

    let images = match curated.get(&name) {
        Some(list) => list.to_vec(),
        None => raw.images.clone(),
    };
    let images = apply_image_fallback(images);

    DisplayRecord {
        id: raw.id.clone().unwrap_or_default(),
        name,
        images,
        location: non_blank_or(raw.location.as_deref(), DEFAULT_LOCATION),
        description: strip_markdown(raw.description.as_deref().unwrap_or_default()),
        rating_average: raw.rating_average.unwrap_or(0.0),
        tags: raw.tags.clone(),
        visit_duration: non_blank_or(raw.visit_duration.as_deref(), DEFAULT_VISIT_DURATION),
    }
}

/// Normalize a whole page of records.
pub fn normalize_page(raw: &[RawAttraction], curated: &CuratedImages) -> Vec<DisplayRecord> {
    raw.iter().map(|r| normalize(r, curated)).collect()
}

/// Substitute the placeholder when the list is empty or its first entry
/// is blank.
fn apply_image_fallback(images: Vec<String>) -> Vec<String> {
    match images.first() {
        Some(first) if !first.trim().is_empty() => images,
        _ => vec![PLACEHOLDER_IMAGE_URL.to_string()],
    }
}

fn non_blank_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str) -> RawAttraction {
        RawAttraction {
            id: Some("a1".to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    // -- image fallback ------------------------------------------------------

    #[test]
    fn empty_images_get_placeholder() {
        let record = raw("Test Temple");
        let display = normalize(&record, &CuratedImages::empty());
        assert_eq!(display.images, vec![PLACEHOLDER_IMAGE_URL.to_string()]);
    }

    #[test]
    fn blank_first_image_gets_placeholder() {
        let mut record = raw("Test Temple");
        record.images = vec!["   ".to_string(), "https://img/real.jpg".to_string()];
        let display = normalize(&record, &CuratedImages::empty());
        assert_eq!(display.images, vec![PLACEHOLDER_IMAGE_URL.to_string()]);
    }

    #[test]
    fn usable_images_kept_verbatim() {
        let mut record = raw("Test Temple");
        record.images = vec!["https://img/a.jpg".to_string(), "https://img/b.jpg".to_string()];
        let display = normalize(&record, &CuratedImages::empty());
        assert_eq!(display.images, record.images);
    }

    #[test]
    fn normalization_is_idempotent_on_images() {
        let record = raw("Test Temple");
        let curated = CuratedImages::empty();
        let once = normalize(&record, &curated);

        // Feed the normalized images back through as if they were raw.
        let mut again = record.clone();
        again.images = once.images.clone();
        let twice = normalize(&again, &curated);
        assert_eq!(once.images, twice.images);
    }

    // -- curated override ----------------------------------------------------

    #[test]
    fn curated_images_take_precedence() {
        let mut record = raw("Lingaraj Temple");
        record.images = vec!["https://img/own.jpg".to_string()];
        let curated = CuratedImages::from_entries([(
            "Lingaraj Temple".to_string(),
            vec!["https://img/curated1.jpg".to_string(), "https://img/curated2.jpg".to_string()],
        )]);

        let display = normalize(&record, &curated);
        assert_eq!(
            display.images,
            vec!["https://img/curated1.jpg".to_string(), "https://img/curated2.jpg".to_string()]
        );
    }

    #[test]
    fn uncurated_name_keeps_record_images() {
        let mut record = raw("Test Temple");
        record.images = vec!["https://img/own.jpg".to_string()];
        let curated = CuratedImages::from_entries([(
            "Lingaraj Temple".to_string(),
            vec!["https://img/curated.jpg".to_string()],
        )]);
        let display = normalize(&record, &curated);
        assert_eq!(display.images, vec!["https://img/own.jpg".to_string()]);
    }

    // -- text defaults -------------------------------------------------------

    #[test]
    fn missing_location_defaulted() {
        let record = raw("Test Temple");
        let display = normalize(&record, &CuratedImages::empty());
        assert_eq!(display.location, DEFAULT_LOCATION);
    }

    #[test]
    fn blank_duration_defaulted() {
        let mut record = raw("Test Temple");
        record.visit_duration = Some("  ".to_string());
        let display = normalize(&record, &CuratedImages::empty());
        assert_eq!(display.visit_duration, DEFAULT_VISIT_DURATION);
    }

    #[test]
    fn description_is_sanitized() {
        let mut record = raw("Test Temple");
        record.description = Some("**Ancient** shrine".to_string());
        let display = normalize(&record, &CuratedImages::empty());
        assert_eq!(display.description, "Ancient shrine");
    }

    #[test]
    fn fully_empty_record_never_errors() {
        let display = normalize(&RawAttraction::default(), &CuratedImages::empty());
        assert_eq!(display.id, "");
        assert_eq!(display.name, "");
        assert_eq!(display.images, vec![PLACEHOLDER_IMAGE_URL.to_string()]);
        assert_eq!(display.location, DEFAULT_LOCATION);
        assert_eq!(display.rating_average, 0.0);
    }

    // -- serde tolerance -----------------------------------------------------

    #[test]
    fn deserializes_with_missing_fields() {
        let record: RawAttraction =
            serde_json::from_str(r#"{"_id": "abc", "name": "Udayagiri Caves"}"#).unwrap();
        assert_eq!(record.id.as_deref(), Some("abc"));
        assert!(record.images.is_empty());
        assert!(record.rating_average.is_none());
    }

    #[test]
    fn deserializes_camel_case_aliases() {
        let record: RawAttraction = serde_json::from_str(
            r#"{"name": "Museum", "ratingAverage": 4.2, "visitDuration": "2-3 hours"}"#,
        )
        .unwrap();
        assert_eq!(record.rating_average, Some(4.2));
        assert_eq!(record.visit_duration.as_deref(), Some("2-3 hours"));
    }
}
