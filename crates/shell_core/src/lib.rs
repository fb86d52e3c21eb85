//! App Shell core - host-side bootstrap for an embedded application module
//!
//! This crate contains the boundary logic with zero desktop dependencies:
//! it loads a persisted settings record, hands the application module its
//! one-time init payload (viewport, locales, selected language), and
//! services the module's outbound port, persisting `saveSettings` payloads.
//! Storage and host facts are injected, so embedders and tests choose the
//! implementations.

pub mod flags;
pub mod host;
pub mod port;
pub mod settings;
pub mod shell;
pub mod storage;

pub use flags::{Flags, Languages, Viewport};
pub use host::{FixedHost, Host};
pub use port::{OutboundEvent, PortSender, SAVE_SETTINGS};
pub use settings::{CorruptPolicy, SettingsRecord, SettingsStore};
pub use shell::{AppModule, RunningShell, Shell, ShellError};
pub use storage::{FileStore, MemoryStore, StorageBackend};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
