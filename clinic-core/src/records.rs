//! Records returned by the `/ajax/load-*` endpoints.
//!
//! Every endpoint answers with a JSON list. Lists are decoded into typed
//! records here and then flattened into `Choice`s, the (value, label) pair a
//! select option or checkbox is rendered from.

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key as sent by the server. Integers and strings are both accepted
/// and kept as text, since the browser only ever sees option values as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `{id, name}`: states, cities, clinics, doctors and procedures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecord {
    pub id: RecordId,
    pub name: String,
}

/// `{start, end}`: an open appointment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: Timestamp,
    pub end: Timestamp,
}

/// A single selectable entry: option value plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<NamedRecord> for Choice {
    fn from(record: NamedRecord) -> Self {
        Choice {
            value: record.id.0,
            label: record.name,
        }
    }
}

impl From<TimeSlot> for Choice {
    /// The slot start doubles as the submitted appointment date.
    fn from(slot: TimeSlot) -> Self {
        Choice {
            value: slot.start.to_string(),
            label: format!("{} - {}", slot.start, slot.end),
        }
    }
}

/// Which record shape an endpoint answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Named,
    Slot,
}

impl RecordKind {
    /// Decode a response body into choices, preserving server order.
    pub fn decode(&self, body: &str) -> anyhow::Result<Vec<Choice>> {
        let choices = match self {
            RecordKind::Named => serde_json::from_str::<Vec<NamedRecord>>(body)?
                .into_iter()
                .map(Choice::from)
                .collect(),
            RecordKind::Slot => serde_json::from_str::<Vec<TimeSlot>>(body)?
                .into_iter()
                .map(Choice::from)
                .collect(),
        };
        Ok(choices)
    }
}
