// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::models::RenderedTable;

/// Rendered table as pretty-printed JSON.
pub(crate) fn to_json(rendered: &RenderedTable) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(rendered)?;
    json.push('\n');
    Ok(json)
}

/// Header row plus one record per rendered row.
pub(crate) fn to_csv(headers: &[String], rows: &[Vec<String>]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
