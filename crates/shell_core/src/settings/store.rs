//! Settings load/persist against an injected storage backend.

use serde_json::Value;

use super::{SettingsError, SettingsRecord, SettingsResult};
use crate::storage::StorageBackend;

/// Storage key the settings record lives under.
pub const SETTINGS_KEY: &str = "settings";

/// What to do when the persisted record is not valid JSON.
///
/// The stored bytes are outside the shell's control, so this is a real
/// case, not a theoretical one: a partial write by an older build, a hand
/// edit, disk corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptPolicy {
    /// Propagate [`SettingsError::Corrupt`] to the caller.
    #[default]
    Fail,
    /// Log a warning and start from the empty record. The corrupt value
    /// stays on disk until the next `saveSettings` overwrites it.
    Reset,
}

/// Binds a storage backend to the fixed settings key.
///
/// Load happens once at startup; persist happens on every `saveSettings`
/// event, replacing the record wholesale.
#[derive(Debug)]
pub struct SettingsStore<B> {
    backend: B,
    policy: CorruptPolicy,
}

impl<B: StorageBackend> SettingsStore<B> {
    /// Create a store with the default (fail-on-corrupt) policy.
    pub fn new(backend: B) -> Self {
        Self::with_policy(backend, CorruptPolicy::default())
    }

    /// Create a store with an explicit corruption policy.
    pub fn with_policy(backend: B, policy: CorruptPolicy) -> Self {
        Self { backend, policy }
    }

    /// The configured corruption policy.
    pub fn policy(&self) -> CorruptPolicy {
        self.policy
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the persisted record.
    ///
    /// An absent record is the empty record. A malformed record is handled
    /// per [`CorruptPolicy`].
    pub fn load(&self) -> SettingsResult<SettingsRecord> {
        let Some(raw) = self.backend.read(SETTINGS_KEY)? else {
            tracing::debug!("no persisted settings, starting empty");
            return Ok(SettingsRecord::empty());
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Ok(SettingsRecord::from(value)),
            Err(e) => match self.policy {
                CorruptPolicy::Reset => {
                    tracing::warn!("Persisted settings are corrupt, resetting: {}", e);
                    Ok(SettingsRecord::empty())
                }
                CorruptPolicy::Fail => Err(SettingsError::Corrupt(e)),
            },
        }
    }

    /// Persist `value` as the new settings record, overwriting the old one.
    pub fn persist(&self, value: &Value) -> SettingsResult<()> {
        let json = serde_json::to_string_pretty(value).map_err(SettingsError::Serialize)?;
        self.backend.write(SETTINGS_KEY, &json)?;

        tracing::debug!("persisted settings record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn absent_record_loads_empty() {
        let store = SettingsStore::new(MemoryStore::new());
        let record = store.load().unwrap();
        assert!(record.is_empty());
        assert!(record.language().is_none());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let store = SettingsStore::new(MemoryStore::new());
        store.persist(&json!({ "language": "de" })).unwrap();

        let record = store.load().unwrap();
        assert_eq!(record.language(), Some("de"));
    }

    #[test]
    fn persist_replaces_wholesale() {
        let store = SettingsStore::new(MemoryStore::new());
        store
            .persist(&json!({ "language": "fr", "theme": "dark" }))
            .unwrap();
        store.persist(&json!({ "language": "de" })).unwrap();

        let record = store.load().unwrap();
        assert_eq!(record.language(), Some("de"));
        assert!(record.as_value().get("theme").is_none());
    }

    #[test]
    fn corrupt_record_fails_by_default() {
        let backend = MemoryStore::new();
        backend.write(SETTINGS_KEY, "{not json").unwrap();

        let store = SettingsStore::new(backend);
        assert!(matches!(store.load(), Err(SettingsError::Corrupt(_))));
    }

    #[test]
    fn corrupt_record_resets_when_configured() {
        let backend = MemoryStore::new();
        backend.write(SETTINGS_KEY, "{not json").unwrap();

        let store = SettingsStore::with_policy(backend, CorruptPolicy::Reset);
        let record = store.load().unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn non_object_record_is_accepted() {
        let backend = MemoryStore::new();
        backend.write(SETTINGS_KEY, "[1, 2, 3]").unwrap();

        let store = SettingsStore::new(backend);
        let record = store.load().unwrap();
        assert!(record.language().is_none());
    }
}
