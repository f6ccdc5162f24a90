// src/export/model.rs

use crate::core::time::display_datetime;
use crate::models::{RenderedTable, TableDescriptor};

/// Headers for CSV / XLSX / PDF / text.
pub(crate) fn get_headers(table: &TableDescriptor) -> Vec<String> {
    table.headers()
}

/// Rendered table as a grid of plain strings.
pub(crate) fn table_to_rows(rendered: &RenderedTable) -> Vec<Vec<String>> {
    rendered.to_strings()
}

pub(crate) fn title(table: &TableDescriptor) -> String {
    table.title.clone().unwrap_or_else(|| "Results".to_string())
}

/// "Start 00: 2024-01-01 10:00:00", only when the table has a reference time.
pub(crate) fn start00_caption(table: &TableDescriptor) -> Option<String> {
    table
        .start00
        .as_deref()
        .map(|s| format!("Start 00: {}", display_datetime(Some(s))))
}
