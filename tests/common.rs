#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use racetable::models::{
    Change, ColumnDescriptor, FieldType, Record, RunRecord, TableDescriptor,
};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const START00: &str = "2024-01-01T00:00:00Z";

pub fn rtb() -> Command {
    cargo_bin_cmd!("racetable")
}

/// Create a temporary file path inside the system temp dir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("racetable_{name}.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn write_temp(name: &str, ext: &str, content: &str) -> String {
    let p = temp_out(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

/// Results table used across tests:
/// `#`, run_id, name, class, start (relative), finish (relative), time, edit.
pub fn results_table() -> TableDescriptor {
    TableDescriptor::new(vec![
        ColumnDescriptor::decorative(FieldType::RowNumber).with_class("w3-right-align"),
        ColumnDescriptor::field("run_id").with_title("Id"),
        ColumnDescriptor::field("name").with_title("Name"),
        ColumnDescriptor::field("class_name").with_title("Class"),
        ColumnDescriptor::field("start_time")
            .with_type(FieldType::RelativeToStartTime)
            .with_title("Start"),
        ColumnDescriptor::field("finish_time")
            .with_type(FieldType::RelativeToStartTime)
            .with_title("Finish"),
        ColumnDescriptor::field("time").with_title("Time"),
        ColumnDescriptor::decorative(FieldType::EditRow).with_extra("fn_name", "editRun"),
    ])
    .with_start00(START00)
}

pub fn runs() -> Vec<Record> {
    vec![
        RunRecord::new(7, "Anna", "Novak")
            .with_class("D21")
            .with_times(Some("2024-01-01T00:01:00Z"), Some("2024-01-01T00:03:05Z"))
            .into(),
        RunRecord::new(3, "Petr", "Svoboda")
            .with_class("H21")
            .with_times(Some("2024-01-01T00:02:00Z"), None)
            .into(),
        RunRecord::new(12, "Eva", "Dvorak")
            .with_class("D21")
            .with_times(Some("2024-01-01T00:00:30Z"), Some("2024-01-01T02:05:37Z"))
            .into(),
    ]
}

pub fn finish_change(id: i64, run_id: i64, finish: &str, user: &str) -> Change {
    Change::new(id, run_id, user).with_update("finish_time", finish)
}

pub const TABLE_YAML: &str = r#"
title: Middle distance
start00: "2024-01-01T00:00:00Z"
columns:
  - field_type: RowNumber
  - field_name: run_id
    title: Id
  - field_name: name
    title: Name
  - field_name: finish_time
    field_type: RelativeToStartTime
    title: Finish
  - field_name: time
    title: Time
"#;

pub const RECORDS_JSON: &str = r#"[
  {"run_id": 7, "first_name": "Anna", "last_name": "Novak",
   "start_time": "2024-01-01T00:01:00Z", "finish_time": "2024-01-01T00:03:05Z"},
  {"run_id": 3, "first_name": "Petr", "last_name": "Svoboda",
   "start_time": "2024-01-01T00:02:00Z"}
]"#;

pub const CHANGES_JSON: &str = r#"[
  {"id": 41, "data_id": 7, "field_updates": {"run_id": 7, "finish_time": "2024-01-01T00:05:00Z"},
   "user_id": "u1", "note": "checked the chip"},
  {"id": 42, "data_id": 99, "field_updates": {"finish_time": "2024-01-01T00:06:00Z"}, "user_id": "u2"},
  {"id": 43, "data_id": 7, "field_updates": {"finish_time": "2024-01-01T00:04:00Z"},
   "user_id": "u3", "status": "Rejected"}
]"#;
