//! Share storage abstraction
//!
//! This module defines the `ShareStore` trait: a flat expiring blob store
//! keyed by share handle. Implementations can use various backends; the
//! crate ships memory and file ones. Shares are immutable once stored and
//! disappear after their time-to-live elapses.

use crate::ShareId;
use chrono::{DateTime, Duration, Utc};
use deck_model::Slide;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default share lifetime: 7 days.
pub const DEFAULT_TTL_SECONDS: i64 = 60 * 60 * 24 * 7;

/// One stored share: the slide payload plus its lifetime bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPresentation {
    /// The shared slides
    pub slides: Vec<Slide>,
    /// When the share was stored
    pub stored_at: DateTime<Utc>,
    /// When the share stops resolving
    pub expires_at: DateTime<Utc>,
}

impl StoredPresentation {
    /// Create a share valid for `ttl` from now.
    pub fn new(slides: Vec<Slide>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            slides,
            stored_at: now,
            expires_at: now + ttl,
        }
    }

    /// Whether the share has passed its expiry at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Errors that can occur during share storage operations
#[derive(Debug, Error)]
pub enum ShareError {
    /// The handle does not resolve: never stored, or past expiry.
    /// The two cases are indistinguishable by design.
    #[error("Presentation not found or expired: {0}")]
    NotFound(String),

    /// The payload was rejected before storage
    #[error("Presentation data is required")]
    EmptyPayload,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for share storage operations
pub type ShareResult<T> = Result<T, ShareError>;

/// Trait for share storage backends
///
/// A deliberately small contract: put a blob under a fresh random handle
/// with an expiry, get it back while it lives. Implementations must be
/// thread-safe (`&self` methods with internal locking) so a server can
/// share one store across connections.
pub trait ShareStore: Send + Sync {
    /// Store slides under a fresh handle, valid for `ttl`.
    ///
    /// An empty slide list is rejected: there is nothing to share.
    fn put(&self, slides: &[Slide], ttl: Duration) -> ShareResult<ShareId>;

    /// Store slides with the default 7-day lifetime.
    fn put_default(&self, slides: &[Slide]) -> ShareResult<ShareId> {
        self.put(slides, Duration::seconds(DEFAULT_TTL_SECONDS))
    }

    /// Fetch the slides stored under a handle.
    ///
    /// Returns [`ShareError::NotFound`] when the handle was never stored or
    /// its share has expired.
    fn get(&self, id: &ShareId) -> ShareResult<Vec<Slide>>;

    /// Whether a live (non-expired) share exists under the handle
    fn contains(&self, id: &ShareId) -> bool {
        self.get(id).is_ok()
    }

    /// Drop expired shares. Returns how many were removed.
    fn remove_expired(&self) -> ShareResult<usize>;
}
