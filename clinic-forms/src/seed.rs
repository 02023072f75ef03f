//! Initial form state embedded by the server.
//!
//! Templates emit it with Django's `json_script` filter:
//!
//! ```json
//! {
//!   "endpoint_base": "/ajax",
//!   "fields": {"id_country": {"value": 1, "choices": [{"id": 1, "name": "Peru"}]}},
//!   "working_schedule": "[{\"start\":\"2024-01-01T09:00:00\",\"end\":\"2024-01-01T10:00:00\"}]"
//! }
//! ```
//!
//! Every key is optional.

use crate::chain::{FetchRequest, Preselection, SelectorChain};
use clinic_core::endpoint::DEFAULT_ENDPOINT_BASE;
use clinic_core::records::{Choice, NamedRecord, RecordId};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldSeed {
    pub value: Option<RecordId>,
    /// Server-rendered options; only used for the first field of a chain.
    pub choices: Vec<NamedRecord>,
    /// Ticked checkbox values, for checklists.
    pub checked: Vec<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSeed {
    pub endpoint_base: Option<String>,
    /// Keyed by DOM id.
    pub fields: BTreeMap<String, FieldSeed>,
    /// Either the raw hidden field text or the decoded list itself.
    pub working_schedule: Option<serde_json::Value>,
}

impl PageSeed {
    /// Decode the seed text. Anything but a JSON object is rejected.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            anyhow::bail!("page seed must be a JSON object, got {}", kind_of(&value));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn endpoint_base(&self) -> &str {
        self.endpoint_base
            .as_deref()
            .filter(|base| !base.trim().is_empty())
            .unwrap_or(DEFAULT_ENDPOINT_BASE)
    }

    pub fn preselection(&self) -> Preselection {
        self.fields
            .iter()
            .fold(Preselection::new(), |preselection, (dom_id, field)| {
                let preselection = match &field.value {
                    Some(value) => preselection.with_value(dom_id, value.as_str()),
                    None => preselection,
                };
                if field.checked.is_empty() {
                    preselection
                } else {
                    preselection.with_checked(dom_id, field.checked.iter().map(|id| id.to_string()))
                }
            })
    }

    /// Hidden field text for the working schedule, if the page carried one.
    pub fn working_schedule(&self) -> Option<String> {
        match self.working_schedule.as_ref()? {
            serde_json::Value::String(raw) => Some(raw.clone()),
            serde_json::Value::Null => None,
            value => Some(value.to_string()),
        }
    }

    /// Fill the chain's first field and replay the preselected values.
    pub fn apply(&self, chain: &mut SelectorChain) -> Vec<FetchRequest> {
        let root = chain
            .field(0)
            .and_then(|field| self.fields.get(&field.dom_id));
        if let Some(root) = root {
            let choices = root.choices.iter().cloned().map(Choice::from).collect();
            chain.set_root_choices(choices);
        }
        chain.replay(&self.preselection())
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
