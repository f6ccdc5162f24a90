use crate::models::record::RowKey;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Review state of a change request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ChangeStatus {
    #[default]
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "accepted")]
    Accepted,
    #[serde(alias = "rejected")]
    Rejected,
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeStatus::Pending => f.write_str("Pending"),
            ChangeStatus::Accepted => f.write_str("Accepted"),
            ChangeStatus::Rejected => f.write_str("Rejected"),
        }
    }
}

/// A proposed field-level update to one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub id: i64,
    /// `run_id` of the record this change targets.
    pub data_id: Value,
    #[serde(default)]
    pub field_updates: Map<String, Value>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub status: ChangeStatus,
}

impl Change {
    pub fn new(id: i64, data_id: impl Into<Value>, user_id: &str) -> Self {
        Self {
            id,
            data_id: data_id.into(),
            field_updates: Map::new(),
            user_id: user_id.to_string(),
            note: None,
            status: ChangeStatus::Pending,
        }
    }

    pub fn with_update(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.field_updates.insert(field.to_string(), value.into());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_status(mut self, status: ChangeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn target(&self) -> Option<RowKey> {
        RowKey::from_value(&self.data_id)
    }

    /// Updated fields, leaving out the identifying field.
    pub fn updates<'a>(&'a self, id_field: &'a str) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.field_updates
            .iter()
            .filter(move |(name, _)| name.as_str() != id_field)
            .map(|(name, value)| (name.as_str(), value))
    }
}
