//! Settings manager tying the model to a store.
//!
//! Load failures of any kind degrade to the default settings; nothing here
//! ever returns an error to the caller except the JSON syntax check on an
//! editor commit, which the UI turns into an invalid-input flag.

use serde_json::Value;

use super::model::Settings;
use super::store::KeyValueStore;

/// Storage key for the single persisted settings object.
pub const SETTINGS_KEY: &str = "settings";

/// Owns the current settings and their persistence.
///
/// Keeps two views of the stored document: the raw JSON value exactly as
/// committed (what the editor shows) and the typed settings derived from it
/// (what the table logic consumes).
pub struct SettingsManager {
    store: Box<dyn KeyValueStore>,
    key: String,
    value: Value,
    settings: Settings,
}

impl SettingsManager {
    /// Create a manager over `store` for the given key.
    ///
    /// Starts with default settings - call `load()` after.
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let settings = Settings::default();
        let value = serde_json::to_value(&settings).unwrap_or(Value::Null);
        Self {
            store,
            key: key.into(),
            value,
            settings,
        }
    }

    /// Get the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the current typed settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get the stored document as pretty-printed JSON, for the editor.
    pub fn raw_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Read settings from the store.
    ///
    /// A missing key, unreadable storage, or malformed stored JSON all
    /// degrade to the defaults; the store implementation logs the cause.
    pub fn load(&mut self) {
        match self.store.get(&self.key) {
            Some(value) => {
                self.settings = Settings::from_value(value.clone());
                self.value = value;
            }
            None => {
                self.settings = Settings::default();
                self.value = serde_json::to_value(&self.settings).unwrap_or(Value::Null);
            }
        }
    }

    /// Re-read settings from the store, picking up writes made elsewhere.
    ///
    /// Last writer wins; there is no merge or conflict detection.
    pub fn reload(&mut self) {
        self.load();
        tracing::debug!("settings re-synchronized from store");
    }

    /// Commit a user-edited JSON blob, replacing the stored settings.
    ///
    /// The only gate is JSON syntax: a parseable blob wholesale-replaces
    /// the stored document even if it is not settings-shaped (the typed
    /// view then degrades to defaults). A parse error is returned so the
    /// caller can flag the input; the previous settings stay committed.
    pub fn commit_json(&mut self, text: &str) -> Result<(), serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        self.settings = Settings::from_value(value.clone());
        self.persist(value);
        Ok(())
    }

    /// Serialize the current typed settings and write them to the store.
    pub fn save(&mut self) {
        match serde_json::to_value(&self.settings) {
            Ok(value) => self.persist(value),
            Err(e) => tracing::warn!("failed to serialize settings: {}", e),
        }
    }

    /// Write a document to the store; failures are logged, never raised.
    fn persist(&mut self, value: Value) {
        if let Err(e) = self.store.set(&self.key, &value) {
            tracing::warn!("failed to persist settings under '{}': {}", self.key, e);
        }
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::store::{FileStore, MemoryStore};
    use serde_json::json;
    use tempfile::tempdir;

    fn memory_manager() -> SettingsManager {
        SettingsManager::new(Box::new(MemoryStore::new()), SETTINGS_KEY)
    }

    #[test]
    fn load_with_empty_store_yields_defaults() {
        let mut manager = memory_manager();
        manager.load();
        assert_eq!(manager.settings(), &Settings::default());
    }

    #[test]
    fn load_with_corrupted_file_yields_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{definitely not json").unwrap();

        let mut manager =
            SettingsManager::new(Box::new(FileStore::new(dir.path())), SETTINGS_KEY);
        manager.load();
        assert_eq!(manager.settings(), &Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut manager =
            SettingsManager::new(Box::new(FileStore::new(dir.path())), SETTINGS_KEY);
        manager
            .commit_json(crate::settings::SAMPLE_SETTINGS_JSON)
            .unwrap();
        let committed = manager.settings().clone();

        let mut fresh =
            SettingsManager::new(Box::new(FileStore::new(dir.path())), SETTINGS_KEY);
        fresh.load();
        assert_eq!(fresh.settings(), &committed);
    }

    #[test]
    fn commit_invalid_json_keeps_previous_settings() {
        let mut manager = memory_manager();
        manager
            .commit_json(r#"{"targetConcentration":0.5,"seasonings":[],"containers":[]}"#)
            .unwrap();

        let result = manager.commit_json("{not json");
        assert!(result.is_err());
        assert_eq!(manager.settings().target_concentration, 0.5);
    }

    #[test]
    fn commit_replaces_stored_document_exactly() {
        let mut manager = memory_manager();
        manager
            .commit_json(r#"{"targetConcentration":0.5,"seasonings":[],"containers":[]}"#)
            .unwrap();

        let stored = manager.store.get(SETTINGS_KEY).unwrap();
        assert_eq!(
            stored,
            json!({"targetConcentration": 0.5, "seasonings": [], "containers": []})
        );
        assert_eq!(manager.settings().target_concentration, 0.5);
    }

    #[test]
    fn commit_accepts_non_settings_shaped_json() {
        let mut manager = memory_manager();
        manager.commit_json(r#"{"whatever": [1, 2, 3]}"#).unwrap();

        // Stored verbatim, typed view degrades to defaults
        let stored = manager.store.get(SETTINGS_KEY).unwrap();
        assert_eq!(stored, json!({"whatever": [1, 2, 3]}));
        assert_eq!(manager.settings(), &Settings::default());
    }

    #[test]
    fn reload_picks_up_external_writes() {
        let dir = tempdir().unwrap();
        let mut manager =
            SettingsManager::new(Box::new(FileStore::new(dir.path())), SETTINGS_KEY);
        manager.load();
        assert_eq!(manager.settings().target_concentration, 0.6);

        // Another instance writes a new document
        let mut other =
            SettingsManager::new(Box::new(FileStore::new(dir.path())), SETTINGS_KEY);
        other
            .commit_json(r#"{"targetConcentration":0.8,"seasonings":[],"containers":[]}"#)
            .unwrap();

        manager.reload();
        assert_eq!(manager.settings().target_concentration, 0.8);
    }

    #[test]
    fn save_persists_typed_settings() {
        let mut manager = memory_manager();
        manager.save();

        let stored = manager.store.get(SETTINGS_KEY).unwrap();
        let settings = Settings::from_value(stored);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn raw_json_tracks_commits() {
        let mut manager = memory_manager();
        manager.commit_json(r#"{"a":1}"#).unwrap();
        assert!(manager.raw_json_pretty().contains("\"a\""));
    }
}
