//! Error types for model operations

use thiserror::Error;

/// Failures raised by model-level lookups and validation.
///
/// The display strings are user-facing: the edit engine surfaces them
/// verbatim in its error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckModelError {
    #[error("Slide not found")]
    SlideNotFound,

    #[error("Element not found")]
    ElementNotFound,

    #[error("Invalid presentation data")]
    InvalidData,

    #[error("Invalid presentation format")]
    InvalidFormat,
}

pub type Result<T> = std::result::Result<T, DeckModelError>;
