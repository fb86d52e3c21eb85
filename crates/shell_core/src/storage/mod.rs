//! Injected key-value storage.
//!
//! The shell never touches an ambient storage singleton. Embedders hand it
//! a [`StorageBackend`], which keeps the persistence medium swappable:
//! a directory of files on desktop, an in-memory map in tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access storage: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A string-keyed store for serialized records.
///
/// Writes replace the previous value wholesale; there is no transaction
/// discipline beyond last-write-wins.
pub trait StorageBackend {
    /// Read the value stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `contents` under `key`, overwriting any previous value.
    fn write(&self, key: &str, contents: &str) -> StorageResult<()>;
}

/// Reject keys that would escape the backing medium (path separators,
/// empty names).
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() || key.contains(['/', '\\', '.']) {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_validation() {
        assert!(validate_key("settings").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a.b").is_err());
    }
}
