//! Persisted settings: the record, the store, and the corruption policy.
//!
//! This module provides:
//! - An open string-keyed settings record ([`SettingsRecord`])
//! - Load/persist against an injected storage backend ([`SettingsStore`])
//! - An explicit policy for malformed persisted data ([`CorruptPolicy`])
//!
//! # Example
//!
//! ```
//! use shell_core::settings::SettingsStore;
//! use shell_core::storage::MemoryStore;
//!
//! let store = SettingsStore::new(MemoryStore::new());
//!
//! // Nothing persisted yet: the record is empty
//! let record = store.load().unwrap();
//! assert!(record.language().is_none());
//!
//! // Persist a record, read it back
//! store.persist(&serde_json::json!({ "language": "fr" })).unwrap();
//! assert_eq!(store.load().unwrap().language(), Some("fr"));
//! ```

mod record;
mod store;

pub use record::SettingsRecord;
pub use store::{CorruptPolicy, SettingsStore, SETTINGS_KEY};

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur while loading or persisting settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to access settings storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Persisted settings are not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
