//! Outbound event port.
//!
//! The application module talks back to the host through exactly one
//! channel. Events are tag + payload; the shell only ever acts on the
//! [`SAVE_SETTINGS`] tag and drops the rest.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Event tag requesting that the payload be persisted as the new settings
/// record.
pub const SAVE_SETTINGS: &str = "saveSettings";

/// A message emitted by the application module toward the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEvent {
    /// Tag naming the requested effect.
    pub msg: String,

    /// Arbitrary JSON payload, interpreted per tag.
    pub value: Value,
}

impl OutboundEvent {
    pub fn new(msg: impl Into<String>, value: Value) -> Self {
        Self {
            msg: msg.into(),
            value,
        }
    }

    /// Shorthand for a `saveSettings` event.
    pub fn save_settings(value: Value) -> Self {
        Self::new(SAVE_SETTINGS, value)
    }
}

/// The shell stopped listening (it was dropped or its loop ended).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Outbound port is closed")]
pub struct ClosedPort;

/// The application module's half of the port.
///
/// Clonable, so a module may hand copies to worker threads; delivery stays
/// in whatever order the channel observes the sends.
#[derive(Debug, Clone)]
pub struct PortSender {
    tx: Sender<OutboundEvent>,
}

impl PortSender {
    /// Send an event toward the shell.
    pub fn send(&self, event: OutboundEvent) -> Result<(), ClosedPort> {
        self.tx.send(event).map_err(|_| ClosedPort)
    }

    /// Build and send an event in one step.
    pub fn emit(&self, msg: impl Into<String>, value: Value) -> Result<(), ClosedPort> {
        self.send(OutboundEvent::new(msg, value))
    }
}

/// Create the port pair: the sender goes to the application module, the
/// receiver stays with the shell.
pub(crate) fn outbound_channel() -> (PortSender, Receiver<OutboundEvent>) {
    let (tx, rx) = mpsc::channel();
    (PortSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_arrive_in_send_order() {
        let (port, rx) = outbound_channel();

        port.emit("first", json!(1)).unwrap();
        port.emit("second", json!(2)).unwrap();

        assert_eq!(rx.recv().unwrap().msg, "first");
        assert_eq!(rx.recv().unwrap().msg, "second");
    }

    #[test]
    fn send_after_shell_is_gone_reports_closed() {
        let (port, rx) = outbound_channel();
        drop(rx);

        assert_eq!(
            port.send(OutboundEvent::save_settings(json!({}))),
            Err(ClosedPort)
        );
    }

    #[test]
    fn event_wire_shape() {
        let event = OutboundEvent::save_settings(json!({ "language": "de" }));
        let wire = serde_json::to_value(&event).unwrap();

        assert_eq!(wire["msg"], json!("saveSettings"));
        assert_eq!(wire["value"]["language"], json!("de"));
    }
}
