//! Persistent key-value port and JSON snapshot codec.
//!
//! # Design
//! - State containers never touch browser storage directly; they go through
//!   [`KeyValueStore`] so the same code runs against [`MemoryStore`] in tests.
//! - Snapshots are JSON blobs under fixed keys. An absent key means no prior
//!   state; a malformed blob is reported as [`SnapshotError::Malformed`] and
//!   callers fall back to the default value.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use thiserror::Error;

/// Storage key for the signed-in user snapshot.
pub const USER_KEY: &str = "marquee.user";
/// Storage key for the watchlist snapshot.
pub const WATCHLIST_KEY: &str = "marquee.watchlist";
/// Reserved storage key for user ratings; only ever cleared.
pub const RATINGS_KEY: &str = "marquee.ratings";

/// Failure raised by a key-value backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The backend refused the write (quota exceeded, privacy mode, etc).
    #[error("storage write rejected")]
    WriteRejected {
        /// Key being written.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },
}

/// Failure while reading or writing a JSON snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The stored blob could not be parsed.
    #[error("stored snapshot is malformed")]
    Malformed {
        /// Key the blob was read from.
        key: String,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// The in-memory value could not be serialised.
    #[error("snapshot could not be encoded")]
    Encode {
        /// Key the blob was destined for.
        key: String,
        /// Serialisation failure.
        #[source]
        source: serde_json::Error,
    },
    /// The backend rejected the write.
    #[error("snapshot could not be stored")]
    Storage {
        /// Backend failure.
        #[from]
        source: StorageError,
    },
}

impl SnapshotError {
    /// Key associated with the failure.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Malformed { key, .. } | Self::Encode { key, .. } => key,
            Self::Storage {
                source: StorageError::WriteRejected { key, .. },
            } => key,
        }
    }
}

/// Synchronous string key-value persistence.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn delete(&self, key: &str);
}

/// In-memory [`KeyValueStore`] used by tests and native builds.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose writes always fail, mimicking a full quota.
    #[must_use]
    pub fn rejecting_writes() -> Self {
        Self {
            entries: RefCell::default(),
            reject_writes: true,
        }
    }

    /// Seed a raw value, bypassing any write rejection.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Whether a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
                detail: "quota exceeded".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Read and decode the snapshot stored under `key`.
///
/// # Errors
///
/// Returns [`SnapshotError::Malformed`] when the stored blob does not parse.
pub fn load_snapshot<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, SnapshotError> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| SnapshotError::Malformed {
            key: key.to_string(),
            source,
        })
}

/// Read the snapshot under `key`, treating absent or malformed data as the
/// default value.
#[must_use]
pub fn load_snapshot_or_default<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> T {
    match load_snapshot(store, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable snapshot");
            T::default()
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] when serialisation fails and
/// [`SnapshotError::Storage`] when the backend rejects the write.
pub fn write_snapshot<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), SnapshotError> {
    let raw = serde_json::to_string(value).map_err(|source| SnapshotError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_loads_as_none() {
        let store = MemoryStore::new();
        let value: Option<Vec<u32>> = load_snapshot(&store, WATCHLIST_KEY).expect("absent is ok");
        assert!(value.is_none());
    }

    #[test]
    fn snapshot_round_trips_through_store() {
        let store = MemoryStore::new();
        write_snapshot(&store, WATCHLIST_KEY, &vec![3_u32, 1, 2]).expect("write");
        let value: Option<Vec<u32>> = load_snapshot(&store, WATCHLIST_KEY).expect("read");
        assert_eq!(value, Some(vec![3, 1, 2]));
    }

    #[test]
    fn malformed_snapshot_reports_key() {
        let store = MemoryStore::new().with_entry(USER_KEY, "{not json");
        let err = load_snapshot::<Vec<u32>>(&store, USER_KEY).expect_err("garbage must fail");
        assert!(matches!(err, SnapshotError::Malformed { .. }));
        assert_eq!(err.key(), USER_KEY);
    }

    #[test]
    fn malformed_snapshot_falls_back_to_default() {
        let store = MemoryStore::new().with_entry(WATCHLIST_KEY, "[1, 2,");
        let value: Vec<u32> = load_snapshot_or_default(&store, WATCHLIST_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn rejected_write_surfaces_storage_error() {
        let store = MemoryStore::rejecting_writes();
        let err = write_snapshot(&store, RATINGS_KEY, &1_u8).expect_err("write must fail");
        assert!(matches!(err, SnapshotError::Storage { .. }));
        assert_eq!(err.key(), RATINGS_KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn delete_is_a_noop_for_absent_keys() {
        let store = MemoryStore::new().with_entry(USER_KEY, "null");
        store.delete(WATCHLIST_KEY);
        store.delete(USER_KEY);
        assert!(!store.contains(USER_KEY));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn keys_share_the_app_namespace() {
        for key in [USER_KEY, WATCHLIST_KEY, RATINGS_KEY] {
            assert!(key.starts_with("marquee."), "{key}");
        }
    }
}
