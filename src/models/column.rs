use crate::errors::{AppError, AppResult};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Name of the field that identifies a run when the table does not say otherwise.
pub const DEFAULT_ID_FIELD: &str = "run_id";

/// How a column turns a record into cell content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    #[serde(alias = "plain")]
    Plain,
    RowNumber,
    EditRow,
    #[serde(alias = "RelativeToStartObTime")]
    RelativeToStartTime,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Plain => "plain",
            FieldType::RowNumber => "RowNumber",
            FieldType::EditRow => "EditRow",
            FieldType::RelativeToStartTime => "RelativeToStartTime",
        }
    }
}

/// One header cell of a results table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub style_class: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
    /// Header label used by exports; falls back to the field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ColumnDescriptor {
    pub fn field(name: &str) -> Self {
        Self {
            field_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn decorative(field_type: FieldType) -> Self {
        Self {
            field_type,
            ..Default::default()
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.style_class = class.to_string();
        self
    }

    pub fn with_extra(mut self, key: &str, value: &str) -> Self {
        self.extra.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }

    /// True when elapsed times in this column carry milliseconds.
    pub fn wants_millis(&self) -> bool {
        self.extra("precision") == Some("ms")
    }

    pub fn header(&self) -> String {
        match (&self.title, &self.field_name) {
            (Some(title), _) => title.clone(),
            (None, Some(name)) => name.clone(),
            (None, None) => match self.field_type {
                FieldType::RowNumber => "#".to_string(),
                _ => String::new(),
            },
        }
    }
}

/// Everything the renderer needs to know about a table besides its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The event's zero-point timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start00: Option<String>,
    /// Identifying field of the records; `run_id` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,
    /// Offset applied to timestamps written without a zone, e.g. "+01:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            title: None,
            start00: None,
            id_field: None,
            utc_offset: None,
            columns,
        }
    }

    pub fn with_start00(mut self, start00: &str) -> Self {
        self.start00 = Some(start00.to_string());
        self
    }

    pub fn with_id_field(mut self, id_field: &str) -> Self {
        self.id_field = Some(id_field.to_string());
        self
    }

    pub fn id_field(&self) -> &str {
        self.id_field.as_deref().unwrap_or(DEFAULT_ID_FIELD)
    }

    pub fn with_utc_offset(mut self, offset: &str) -> Self {
        self.utc_offset = Some(offset.to_string());
        self
    }

    /// Parsed `utc_offset`; an unparsable value counts as absent.
    /// Use [`TableDescriptor::validate`] to reject it up front.
    pub fn local_offset(&self) -> Option<FixedOffset> {
        self.utc_offset.as_deref().and_then(|s| s.parse().ok())
    }

    /// Index of the column bound to `field_name`.
    pub fn column_index(&self, field_name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.field_name.as_deref() == Some(field_name))
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(ColumnDescriptor::header).collect()
    }

    /// Checks the invariants the renderer relies on.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for name in self.columns.iter().filter_map(|c| c.field_name.as_deref()) {
            if !seen.insert(name) {
                return Err(AppError::InvalidTable(format!(
                    "field '{name}' is bound to more than one column"
                )));
            }
        }

        if self.id_field().trim().is_empty() {
            return Err(AppError::InvalidTable("id_field must not be empty".into()));
        }

        if let Some(offset) = &self.utc_offset
            && offset.parse::<FixedOffset>().is_err()
        {
            return Err(AppError::InvalidOffset(offset.clone()));
        }

        Ok(())
    }
}
