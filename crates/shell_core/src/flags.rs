//! The one-time init payload handed to the application module.

use serde::{Deserialize, Serialize};

use crate::host::Host;
use crate::settings::SettingsRecord;

/// Current viewport dimensions, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Language preferences: the host's ordered locale list plus whatever the
/// user last selected, if anything was persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Languages {
    /// Host-reported locales, most preferred first.
    pub default: Vec<String>,

    /// Persisted selection, absent on first run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

/// Everything the application module receives at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub viewport: Viewport,
    pub languages: Languages,
}

impl Flags {
    /// Assemble the payload from the host and the persisted record.
    pub fn gather(host: &impl Host, record: &SettingsRecord) -> Self {
        Self {
            viewport: host.viewport(),
            languages: Languages {
                default: host.locales(),
                selected: record.language().map(str::to_string),
            },
        }
    }
}
