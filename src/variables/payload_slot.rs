use crate::constants::DEFAULT_PAYLOAD_FIELD;
use serde::{Deserialize, Serialize};

/// Where the payload group lives inside merged variables.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSlot {
    /// The payload is nested under a single field:
    /// `{ "<field>": { ..payload }, ..secondary }`.
    Field(String),

    /// The payload is flattened; its fields are exactly the listed top-level
    /// keys: `{ ..payload, ..secondary }`.
    Fields(Vec<String>),
}

impl PayloadSlot {
    /// Returns `true` if `key` belongs to the payload namespace.
    pub fn claims(&self, key: &str) -> bool {
        match self {
            PayloadSlot::Field(field) => field == key,
            PayloadSlot::Fields(fields) => fields.iter().any(|f| f == key),
        }
    }

    pub(crate) fn field_names(&self) -> Vec<&str> {
        match self {
            PayloadSlot::Field(field) => vec![field.as_str()],
            PayloadSlot::Fields(fields) => fields.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for PayloadSlot {
    fn default() -> Self {
        PayloadSlot::Field(DEFAULT_PAYLOAD_FIELD.to_string())
    }
}

/// How the secondary group is rebuilt from the fields the payload does not claim.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondarySlot {
    /// Remaining fields form the secondary group as-is.
    #[default]
    Flat,

    /// Remaining fields are wrapped: the secondary group is
    /// `{ "<field>": { ..remaining } }`.
    Nested(String),
}
