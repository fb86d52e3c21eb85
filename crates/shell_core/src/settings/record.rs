//! The persisted settings record.

use serde_json::{Map, Value};

/// An open-ended settings record, persisted verbatim.
///
/// The record is whatever JSON the application last asked to save. The
/// shell itself only ever reads one field, `language`, when assembling the
/// init payload; everything else passes through untouched so the
/// application can evolve its settings shape without shell changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsRecord {
    value: Value,
}

impl SettingsRecord {
    /// The empty record: a JSON object with no fields.
    pub fn empty() -> Self {
        Self {
            value: Value::Object(Map::new()),
        }
    }

    /// Selected language, if the record is an object carrying a string
    /// `language` field.
    ///
    /// A record holding a non-object value (array, number, string) is not
    /// an error; it simply has no language.
    pub fn language(&self) -> Option<&str> {
        self.value.get("language")?.as_str()
    }

    /// The raw persisted value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// True for a record with no fields (or a non-object value).
    pub fn is_empty(&self) -> bool {
        match &self.value {
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for SettingsRecord {
    fn from(value: Value) -> Self {
        Self { value }
    }
}
