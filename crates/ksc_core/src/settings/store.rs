//! Key-value storage capability.
//!
//! Persistence is abstracted behind a small trait so the manager and its
//! tests never touch a real filesystem directly. The file-backed
//! implementation keeps one JSON document per key and writes atomically
//! (temp file, then rename).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when writing to a store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write store entry: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store writes.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable key-value storage for JSON documents.
///
/// Reads are infallible by contract: anything that prevents producing a
/// value (missing key, unreadable backing, malformed JSON) is `None`, with
/// the cause logged by the implementation.
pub trait KeyValueStore: Send {
    /// Read the JSON document stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a JSON document under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &Value) -> StoreResult<()>;
}

/// File-backed store: one `<key>.json` file per key inside a base directory.
#[derive(Debug)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir`.
    ///
    /// The directory is created lazily on first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        let path = self.entry_path(key);
        if !path.exists() {
            tracing::debug!("no stored value for '{}'", key);
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        fs::create_dir_all(&self.base_dir)?;

        let json = serde_json::to_string_pretty(value)?;
        let path = self.entry_path(key);

        // Write atomically via temp file in the same directory
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &json)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("saved '{}' to {}", key, path.display());
        Ok(())
    }
}

/// In-memory store for tests and storage-less contexts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let value = json!({"targetConcentration": 0.6, "seasonings": [], "containers": []});
        store.set("settings", &value).unwrap();

        assert_eq!(store.get("settings"), Some(value));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("settings"), None);
    }

    #[test]
    fn file_store_malformed_json_is_none() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("settings.json"), "{not json").unwrap();

        let store = FileStore::new(dir.path());
        assert_eq!(store.get("settings"), None);
    }

    #[test]
    fn file_store_creates_base_dir_on_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join(".config");
        let mut store = FileStore::new(&nested);

        store.set("settings", &json!({})).unwrap();
        assert!(nested.join("settings.json").exists());
    }

    #[test]
    fn file_store_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("settings", &json!({"a": 1})).unwrap();
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let value = json!([1, 2, 3]);

        store.set("settings", &value).unwrap();
        assert_eq!(store.get("settings"), Some(value));
        assert_eq!(store.get("other"), None);
    }
}
