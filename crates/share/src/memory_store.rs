//! In-memory share store implementation.
//!
//! `MemoryShareStore` keeps shares in a `HashMap` behind an `RwLock`. It is
//! the backend for tests and single-process deployments; nothing survives a
//! restart. Expiry is enforced on read, and `remove_expired` reclaims the
//! memory of dead shares.

use crate::storage::{ShareError, ShareResult, ShareStore, StoredPresentation};
use crate::ShareId;
use chrono::{Duration, Utc};
use deck_model::Slide;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// In-memory implementation of [`ShareStore`]
///
/// Thread-safe: reads take a shared lock, writes an exclusive one. Share it
/// across threads with `Arc`.
#[derive(Debug, Default)]
pub struct MemoryShareStore {
    shares: RwLock<HashMap<String, StoredPresentation>>,
}

impl MemoryShareStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored shares, including ones already past expiry
    pub fn share_count(&self) -> usize {
        self.shares.read().unwrap().len()
    }

    /// Drop every share
    pub fn clear(&self) {
        self.shares.write().unwrap().clear();
    }
}

impl ShareStore for MemoryShareStore {
    fn put(&self, slides: &[Slide], ttl: Duration) -> ShareResult<ShareId> {
        if slides.is_empty() {
            return Err(ShareError::EmptyPayload);
        }

        let id = ShareId::generate();
        let share = StoredPresentation::new(slides.to_vec(), ttl);
        debug!(id = %id, expires_at = %share.expires_at, "store share");

        self.shares
            .write()
            .unwrap()
            .insert(id.as_str().to_string(), share);
        Ok(id)
    }

    fn get(&self, id: &ShareId) -> ShareResult<Vec<Slide>> {
        let shares = self.shares.read().unwrap();
        match shares.get(id.as_str()) {
            Some(share) if !share.is_expired(Utc::now()) => Ok(share.slides.clone()),
            _ => Err(ShareError::NotFound(id.as_str().to_string())),
        }
    }

    fn remove_expired(&self) -> ShareResult<usize> {
        let now = Utc::now();
        let mut shares = self.shares.write().unwrap();
        let before = shares.len();
        shares.retain(|_, share| !share.is_expired(now));
        Ok(before - shares.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides() -> Vec<Slide> {
        vec![Slide::with_id("s1"), Slide::with_id("s2")]
    }

    #[test]
    fn test_put_get_round_trip() {
        let store = MemoryShareStore::new();
        let id = store.put_default(&slides()).unwrap();

        let fetched = store.get(&id).unwrap();
        assert_eq!(fetched, slides());
    }

    #[test]
    fn test_each_put_gets_a_fresh_handle() {
        let store = MemoryShareStore::new();
        let a = store.put_default(&slides()).unwrap();
        let b = store.put_default(&slides()).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.share_count(), 2);
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let store = MemoryShareStore::new();
        let err = store.put_default(&[]).unwrap_err();
        assert!(matches!(err, ShareError::EmptyPayload));
    }

    #[test]
    fn test_unknown_handle_is_not_found() {
        let store = MemoryShareStore::new();
        let err = store.get(&ShareId::from("nope")).unwrap_err();
        assert!(matches!(err, ShareError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "Presentation not found or expired: nope"
        );
    }

    #[test]
    fn test_expired_share_stops_resolving() {
        let store = MemoryShareStore::new();
        let id = store.put(&slides(), Duration::seconds(0)).unwrap();

        let err = store.get(&id).unwrap_err();
        assert!(matches!(err, ShareError::NotFound(_)));
        assert!(!store.contains(&id));
    }

    #[test]
    fn test_remove_expired_purges_only_dead_shares() {
        let store = MemoryShareStore::new();
        let dead = store.put(&slides(), Duration::seconds(0)).unwrap();
        let live = store.put(&slides(), Duration::days(7)).unwrap();

        let removed = store.remove_expired().unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.share_count(), 1);
        assert!(store.get(&live).is_ok());
        assert!(store.get(&dead).is_err());
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryShareStore::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    let id = store.put_default(&[Slide::with_id("s")]).unwrap();
                    assert!(store.get(&id).is_ok());
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.share_count(), 200);
    }
}
