//! File-based share store implementation.
//!
//! `FileShareStore` persists each share as one JSON envelope file under a
//! base directory:
//!
//! ```text
//! data/
//! ├── 1a2b3c4d5e6f7.json
//! └── 9z8y7x6w5v4u3.json
//! ```
//!
//! Shares survive restarts until their expiry. Expired files are deleted
//! when read and by `remove_expired`'s directory scan.

use crate::storage::{ShareError, ShareResult, ShareStore, StoredPresentation};
use crate::ShareId;
use chrono::{Duration, Utc};
use deck_model::Slide;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed implementation of [`ShareStore`]
pub struct FileShareStore {
    /// Base directory holding one file per share
    base_path: PathBuf,
}

impl FileShareStore {
    /// Create a store at the given directory, creating it if needed.
    pub fn new(base_path: impl AsRef<Path>) -> ShareResult<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn share_path(&self, id: &ShareId) -> PathBuf {
        self.base_path.join(format!("{}.json", id.as_str()))
    }

    fn read_share(&self, path: &Path) -> ShareResult<StoredPresentation> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Best-effort delete of a dead share file.
    fn discard(&self, path: &Path) {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), %err, "failed to remove expired share");
        }
    }
}

impl ShareStore for FileShareStore {
    fn put(&self, slides: &[Slide], ttl: Duration) -> ShareResult<ShareId> {
        if slides.is_empty() {
            return Err(ShareError::EmptyPayload);
        }

        let id = ShareId::generate();
        let share = StoredPresentation::new(slides.to_vec(), ttl);
        let json = serde_json::to_string_pretty(&share)?;

        fs::write(self.share_path(&id), json)?;
        debug!(id = %id, expires_at = %share.expires_at, "store share");
        Ok(id)
    }

    fn get(&self, id: &ShareId) -> ShareResult<Vec<Slide>> {
        let path = self.share_path(id);
        if !path.exists() {
            return Err(ShareError::NotFound(id.as_str().to_string()));
        }

        let share = self.read_share(&path)?;
        if share.is_expired(Utc::now()) {
            self.discard(&path);
            return Err(ShareError::NotFound(id.as_str().to_string()));
        }

        Ok(share.slides)
    }

    fn remove_expired(&self) -> ShareResult<usize> {
        let now = Utc::now();
        let mut removed = 0;

        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match self.read_share(&path) {
                Ok(share) if share.is_expired(now) => {
                    self.discard(&path);
                    removed += 1;
                }
                Ok(_) => {}
                // An unreadable envelope is as dead as an expired one.
                Err(err) => {
                    warn!(path = %path.display(), %err, "removing unreadable share");
                    self.discard(&path);
                    removed += 1;
                }
            }
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides() -> Vec<Slide> {
        vec![Slide::with_id("s1")]
    }

    #[test]
    fn test_put_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShareStore::new(dir.path()).unwrap();

        let id = store.put_default(&slides()).unwrap();
        assert_eq!(store.get(&id).unwrap(), slides());
    }

    #[test]
    fn test_shares_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let store = FileShareStore::new(dir.path()).unwrap();
            store.put_default(&slides()).unwrap()
        };

        let reopened = FileShareStore::new(dir.path()).unwrap();
        assert_eq!(reopened.get(&id).unwrap(), slides());
    }

    #[test]
    fn test_unknown_handle_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShareStore::new(dir.path()).unwrap();

        let err = store.get(&ShareId::from("missing")).unwrap_err();
        assert!(matches!(err, ShareError::NotFound(_)));
    }

    #[test]
    fn test_expired_share_is_deleted_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShareStore::new(dir.path()).unwrap();

        let id = store.put(&slides(), Duration::seconds(0)).unwrap();
        assert!(store.get(&id).is_err());

        // The file is gone, not just masked.
        assert!(!dir.path().join(format!("{id}.json")).exists());
    }

    #[test]
    fn test_remove_expired_scans_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShareStore::new(dir.path()).unwrap();

        store.put(&slides(), Duration::seconds(0)).unwrap();
        store.put(&slides(), Duration::seconds(0)).unwrap();
        let live = store.put(&slides(), Duration::days(1)).unwrap();

        let removed = store.remove_expired().unwrap();
        assert_eq!(removed, 2);
        assert!(store.get(&live).is_ok());
    }

    #[test]
    fn test_remove_expired_discards_corrupt_envelopes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShareStore::new(dir.path()).unwrap();
        fs::write(dir.path().join("broken.json"), "not an envelope").unwrap();

        let removed = store.remove_expired().unwrap();
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileShareStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.put_default(&[]),
            Err(ShareError::EmptyPayload)
        ));
    }
}
