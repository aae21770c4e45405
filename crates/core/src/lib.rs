//! Pure domain logic for the Bhubaneswar travel guide browse pipeline.
//!
//! This crate has no internal dependencies so it can be used by the HTTP
//! client, the browse engine, and any future CLI or worker tooling:
//!
//! - [`filter`] -- filter state and precedence resolution.
//! - [`pagination`] -- page math and bounds validation.
//! - [`display`] -- raw record to display record normalization.
//! - [`sanitize`] -- markdown delimiter stripping for descriptive text.
//! - [`source`] -- the `AttractionSource` seam queried by the engine.

pub mod categories;
pub mod display;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod sanitize;
pub mod source;
pub mod types;

pub use error::CoreError;
