//! Settings management for Kitchen Salt Calc.
//!
//! This module provides:
//! - The user-editable configuration model (target concentration,
//!   seasonings, containers) with its camelCase JSON wire format
//! - A key-value storage capability with a file-backed implementation
//!   (atomic writes) and an in-memory fake for tests
//! - A manager tying the two together with degrade-to-default loading
//!
//! # Example
//!
//! ```no_run
//! use ksc_core::settings::{FileStore, SettingsManager, SETTINGS_KEY};
//!
//! let store = FileStore::new(".config");
//! let mut manager = SettingsManager::new(Box::new(store), SETTINGS_KEY);
//! manager.load();
//!
//! println!("target: {}", manager.settings().target_concentration);
//!
//! // Commit a user-edited JSON blob (syntax-checked only)
//! manager
//!     .commit_json(r#"{"targetConcentration":0.5,"seasonings":[],"containers":[]}"#)
//!     .unwrap();
//! ```

mod manager;
mod model;
mod store;

pub use manager::{SettingsManager, SETTINGS_KEY};
pub use model::{Container, Seasoning, Settings, SAMPLE_SETTINGS_JSON};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
