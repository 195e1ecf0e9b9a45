//! Error types for editing operations

use deck_model::DeckModelError;
use thiserror::Error;

/// Failures captured by the editor's error state.
///
/// The engine never propagates these to callers; they are recorded on the
/// engine and rendered by the UI's error banner, so the display text must
/// stay user-readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error(transparent)]
    Model(#[from] DeckModelError),
}

pub type Result<T> = std::result::Result<T, EditError>;
