//! File-backed storage with atomic writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{validate_key, StorageBackend, StorageResult};

/// Stores each key as `<key>.json` under a root directory.
///
/// Writes go to a temp file first, then rename, so a crash mid-write never
/// leaves a half-written record behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory this store writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;

        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, contents: &str) -> StorageResult<()> {
        validate_key(key)?;

        fs::create_dir_all(&self.root)?;

        let path = self.path_for(key);

        // Temp file in the same directory, so the rename stays atomic
        let temp_path = path.with_extension("json.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &path)?;

        tracing::debug!(key, path = %path.display(), "wrote storage record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_missing_key_returns_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.read("settings").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.write("settings", r#"{"language":"fr"}"#).unwrap();
        let contents = store.read("settings").unwrap().unwrap();
        assert_eq!(contents, r#"{"language":"fr"}"#);
    }

    #[test]
    fn write_creates_missing_root() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("config").join("appshell");
        let store = FileStore::new(&nested);

        store.write("settings", "{}").unwrap();
        assert!(nested.join("settings.json").exists());
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.write("settings", "{}").unwrap();
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn write_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.write("settings", r#"{"language":"fr"}"#).unwrap();
        store.write("settings", r#"{"language":"de"}"#).unwrap();

        let contents = store.read("settings").unwrap().unwrap();
        assert_eq!(contents, r#"{"language":"de"}"#);
    }

    #[test]
    fn invalid_key_is_rejected() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.write("../outside", "{}").is_err());
    }
}
