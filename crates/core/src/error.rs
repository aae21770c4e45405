//! Error types shared across the core crate.

/// Errors produced by core domain logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed validation (bad page number, unknown category).
    #[error("Validation failed: {0}")]
    Validation(String),
}
