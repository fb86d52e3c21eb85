//! App Shell desktop adapter.
//!
//! Supplies the host facts a desktop process can answer for itself:
//! - Preferred locales from the desktop environment (with fallback)
//! - A per-user config directory for the file-backed settings store
//! - `tracing` initialization honoring `RUST_LOG`
//!
//! The embedder still owns the window, so the initial viewport size is
//! passed in (or left at the default geometry).
//!
//! # Example
//!
//! ```no_run
//! use shell_core::{settings::SettingsStore, shell::Shell};
//! use shell_desktop::{init_tracing, DesktopHost};
//!
//! init_tracing(tracing::Level::INFO);
//!
//! let store = SettingsStore::new(shell_desktop::file_store().expect("no home directory"));
//! let shell = Shell::new(store, DesktopHost::new());
//! # let _ = shell;
//! ```

mod locale;
mod logging;
mod paths;

pub use locale::{requested_locales, FALLBACK_LOCALE};
pub use logging::init_tracing;
pub use paths::{file_store, settings_dir};

use shell_core::flags::Viewport;
use shell_core::host::Host;

/// Initial window geometry when the embedder does not supply one.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1000,
    height: 600,
};

/// A [`Host`] backed by the desktop environment.
#[derive(Debug, Clone)]
pub struct DesktopHost {
    viewport: Viewport,
}

impl DesktopHost {
    /// Host with the default initial geometry.
    pub fn new() -> Self {
        Self::with_viewport(DEFAULT_VIEWPORT)
    }

    /// Host reporting the embedder's actual window size.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self { viewport }
    }
}

impl Default for DesktopHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for DesktopHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn locales(&self) -> Vec<String> {
        requested_locales()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_uses_default_geometry() {
        assert_eq!(DesktopHost::new().viewport(), DEFAULT_VIEWPORT);
    }

    #[test]
    fn explicit_geometry_is_reported_back() {
        let host = DesktopHost::with_viewport(Viewport::new(1920, 1080));
        assert_eq!(host.viewport(), Viewport::new(1920, 1080));
    }

    #[test]
    fn locales_are_never_empty() {
        assert!(!DesktopHost::new().locales().is_empty());
    }
}
