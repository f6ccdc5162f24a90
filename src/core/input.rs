//! Reading table descriptors, records and changes from disk.

use crate::errors::{AppError, AppResult};
use crate::models::{Change, Record, TableDescriptor};
use crate::utils::path::expand_tilde;
use serde::de::DeserializeOwned;
use std::fs;
use tracing::debug;

/// Loads a table descriptor written in YAML or JSON and checks its invariants.
pub fn load_table(path: &str) -> AppResult<TableDescriptor> {
    let content = read(path, "table descriptor")?;
    let table: TableDescriptor = serde_yaml::from_str(&content).map_err(|e| AppError::Input {
        what: "table descriptor",
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    table.validate()?;
    debug!(path, columns = table.columns.len(), "loaded table descriptor");
    Ok(table)
}

/// Loads a JSON array of records.
pub fn load_records(path: &str) -> AppResult<Vec<Record>> {
    let records: Vec<Record> = load_json_array(path, "records")?;
    debug!(path, count = records.len(), "loaded records");
    Ok(records)
}

/// Loads a JSON array of changes.
pub fn load_changes(path: &str) -> AppResult<Vec<Change>> {
    let changes: Vec<Change> = load_json_array(path, "changes")?;
    debug!(path, count = changes.len(), "loaded changes");
    Ok(changes)
}

fn load_json_array<T: DeserializeOwned>(path: &str, what: &'static str) -> AppResult<Vec<T>> {
    let content = read(path, what)?;
    serde_json::from_str(&content).map_err(|e| AppError::Input {
        what,
        path: path.to_string(),
        reason: e.to_string(),
    })
}

fn read(path: &str, what: &'static str) -> AppResult<String> {
    fs::read_to_string(expand_tilde(path)).map_err(|e| AppError::Input {
        what,
        path: path.to_string(),
        reason: e.to_string(),
    })
}
