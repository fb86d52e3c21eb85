//! The bootstrap: load settings, build flags, start the module, service
//! its port.

use std::sync::mpsc::{Receiver, TryRecvError};

use thiserror::Error;

use crate::flags::Flags;
use crate::host::Host;
use crate::port::{outbound_channel, OutboundEvent, PortSender, SAVE_SETTINGS};
use crate::settings::{SettingsError, SettingsStore};
use crate::storage::StorageBackend;

/// Errors that can occur while booting or running the shell.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// An application module the shell can start.
///
/// Opaque to the shell: `init` receives the one-time payload and the
/// module's outbound port, and whatever happens inside stays inside.
/// Any `FnOnce(Flags, PortSender)` qualifies.
pub trait AppModule {
    /// One-time startup. The module keeps the sender for later emissions;
    /// dropping every clone of it ends the shell's event loop.
    fn init(self, flags: Flags, port: PortSender);
}

impl<F: FnOnce(Flags, PortSender)> AppModule for F {
    fn init(self, flags: Flags, port: PortSender) {
        self(flags, port)
    }
}

/// The boundary component: settings store on one side, host on the other,
/// application module in the middle.
///
/// # Example
///
/// ```
/// use shell_core::port::{PortSender, SAVE_SETTINGS};
/// use shell_core::settings::SettingsStore;
/// use shell_core::host::FixedHost;
/// use shell_core::flags::{Flags, Viewport};
/// use shell_core::storage::MemoryStore;
/// use shell_core::shell::Shell;
///
/// let host = FixedHost::new(Viewport::new(1000, 600), vec!["en-US".into()]);
/// let shell = Shell::new(SettingsStore::new(MemoryStore::new()), host);
///
/// let running = shell
///     .boot(|flags: Flags, port: PortSender| {
///         assert_eq!(flags.languages.selected, None);
///         let _ = port.emit(SAVE_SETTINGS, serde_json::json!({ "language": "de" }));
///     })
///     .unwrap();
/// running.run().unwrap();
/// ```
#[derive(Debug)]
pub struct Shell<B, H> {
    store: SettingsStore<B>,
    host: H,
}

impl<B: StorageBackend, H: Host> Shell<B, H> {
    pub fn new(store: SettingsStore<B>, host: H) -> Self {
        Self { store, host }
    }

    /// Start the application module.
    ///
    /// Loads the persisted record, assembles the init payload, and hands
    /// both payload and port to the module. The returned [`RunningShell`]
    /// owns the receiving end; call [`RunningShell::run`] or
    /// [`RunningShell::pump`] to service it.
    pub fn boot<M: AppModule>(self, module: M) -> ShellResult<RunningShell<B>> {
        let record = self.store.load()?;
        let flags = Flags::gather(&self.host, &record);

        tracing::info!(
            width = flags.viewport.width,
            height = flags.viewport.height,
            locales = flags.languages.default.len(),
            selected = flags.languages.selected.as_deref().unwrap_or("-"),
            "starting application module"
        );

        let (port, events) = outbound_channel();
        module.init(flags, port);

        Ok(RunningShell {
            store: self.store,
            events,
        })
    }
}

/// A booted shell servicing the application module's outbound port.
#[derive(Debug)]
pub struct RunningShell<B> {
    store: SettingsStore<B>,
    events: Receiver<OutboundEvent>,
}

impl<B: StorageBackend> RunningShell<B> {
    /// Service the port until the module drops its last sender.
    ///
    /// Events are handled strictly in delivery order. A persistence
    /// failure ends the loop with the underlying error; unhandled tags
    /// never do.
    pub fn run(self) -> ShellResult<()> {
        while let Ok(event) = self.events.recv() {
            self.handle(event)?;
        }

        tracing::debug!("outbound port closed, shell loop done");
        Ok(())
    }

    /// Service only the events already queued, then return.
    ///
    /// For embedders that drive the shell from their own event loop.
    pub fn pump(&mut self) -> ShellResult<()> {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.handle(event)?,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }

    fn handle(&self, event: OutboundEvent) -> ShellResult<()> {
        match event.msg.as_str() {
            SAVE_SETTINGS => {
                if let Err(e) = self.store.persist(&event.value) {
                    tracing::error!("Failed to persist settings: {}", e);
                    return Err(e.into());
                }
                Ok(())
            }
            other => {
                // Single-arm dispatch: every other tag falls through
                tracing::trace!(msg = other, "ignoring outbound event");
                Ok(())
            }
        }
    }
}
