//! HTTP client for the Bhubaneswar travel guide API.
//!
//! Wraps the guide backend's attraction listing endpoint using
//! [`reqwest`] and implements the `AttractionSource` seam consumed by the
//! browse engine.

pub mod api;

pub use api::{GuideApi, GuideApiError};
