//! Per-user storage locations.

use std::path::PathBuf;

use directories::ProjectDirs;

use shell_core::storage::FileStore;

/// Per-user configuration directory for the shell's persisted records.
///
/// `None` when the platform offers no home directory to resolve against.
pub fn settings_dir() -> Option<PathBuf> {
    ProjectDirs::from("io.github", "appshell", "appshell")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// A file store rooted at the per-user configuration directory.
pub fn file_store() -> Option<FileStore> {
    settings_dir().map(FileStore::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_dir_is_app_scoped() {
        if let Some(dir) = settings_dir() {
            assert!(dir.to_string_lossy().contains("appshell"));
        }
    }
}
