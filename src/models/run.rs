use crate::models::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed form of one competitor run, as kept by the event database.
///
/// The renderer works on untyped [`Record`]s; this struct exists so callers
/// holding typed rows do not need to build JSON maps by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub si_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,
    #[serde(default)]
    pub status: String,
}

impl RunRecord {
    pub fn new(run_id: i64, first_name: &str, last_name: &str) -> Self {
        Self {
            run_id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_times(mut self, start: Option<&str>, finish: Option<&str>) -> Self {
        self.start_time = start.map(str::to_string);
        self.finish_time = finish.map(str::to_string);
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = class_name.to_string();
        self
    }
}

impl From<RunRecord> for Record {
    fn from(run: RunRecord) -> Self {
        match serde_json::to_value(run) {
            Ok(Value::Object(map)) => Record(map),
            // a plain struct of strings and integers always serializes to an object
            _ => Record::default(),
        }
    }
}
