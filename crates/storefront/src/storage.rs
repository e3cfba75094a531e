//! Persistent key-value slots.
//!
//! A slot is a single named string value that survives restarts. The cart
//! occupies one slot and rewrites it whole on every mutation.
//!
//! - [`FileSlotStore`] keeps each slot as `<key>.json` inside a data
//!   directory, replaced atomically via a temp file and rename.
//! - [`MemorySlotStore`] keeps slots in process memory (tests, ephemeral
//!   sessions).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors from slot storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used as a slot name.
    #[error("invalid slot key: {0:?}")]
    InvalidKey(String),

    /// Reading or writing the backing file failed.
    #[error("slot I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The value could not be serialized.
    #[error("slot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A store of named, durable string slots.
pub trait SlotStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backing store cannot be
    /// read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot under `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backing store cannot be
    /// written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Check that `key` can name a slot.
///
/// Slot keys become file names, so only a conservative character set is
/// accepted.
///
/// # Errors
///
/// Returns `StorageError::InvalidKey` for empty keys, keys starting with `.`
/// and keys containing anything but ASCII alphanumerics, `_`, `-` and `.`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

// =============================================================================
// File-backed slots
// =============================================================================

/// Slots stored as JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }
}

// =============================================================================
// In-memory slots
// =============================================================================

/// Slots held in process memory.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `key` pre-populated, e.g. to simulate data left
    /// by an earlier session.
    #[must_use]
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("bookinest_cart").is_ok());
        assert!(validate_key("cart-v2.backup").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("nested/key").is_err());
        assert!(validate_key(".hidden").is_err());
    }

    #[test]
    fn test_file_store_missing_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());
        assert!(store.read("bookinest_cart").unwrap().is_none());
    }

    #[test]
    fn test_file_store_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path().join("nested"));

        store.write("bookinest_cart", "[1,2,3]").unwrap();
        assert_eq!(
            store.read("bookinest_cart").unwrap().as_deref(),
            Some("[1,2,3]")
        );

        store.write("bookinest_cart", "[]").unwrap();
        assert_eq!(store.read("bookinest_cart").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("nested/bookinest_cart.json.tmp").exists());
    }

    #[test]
    fn test_file_store_rejects_bad_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());
        assert!(matches!(
            store.write("a/b", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySlotStore::new();
        assert!(store.read("k").unwrap().is_none());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));

        let seeded = MemorySlotStore::with_slot("k", "seed");
        assert_eq!(seeded.read("k").unwrap().as_deref(), Some("seed"));
    }
}
