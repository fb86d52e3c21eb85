//! In-memory storage for tests and non-durable embedders.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{validate_key, StorageBackend, StorageResult};

/// A storage backend that keeps everything in a process-local map.
///
/// Nothing survives a process restart. Clones share the same map, so a
/// test can keep one handle and give another to the shell, then inspect
/// what got written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl StorageBackend for MemoryStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn write(&self, key: &str, contents: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.entries
            .lock()
            .insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.read("settings").unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let store = MemoryStore::new();
        store.write("settings", r#"{"language":"de"}"#).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.read("settings").unwrap().as_deref(),
            Some(r#"{"language":"de"}"#)
        );
    }

    #[test]
    fn clones_share_the_map() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.write("settings", "{}").unwrap();
        assert_eq!(handle.read("settings").unwrap().as_deref(), Some("{}"));
    }
}
