//! Tracing setup for desktop embedders.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize global tracing for the process.
///
/// Respects `RUST_LOG`, falling back to the given default level, and
/// writes to stderr. Call once at startup, before booting the shell.
pub fn init_tracing(default_level: tracing::Level) {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
