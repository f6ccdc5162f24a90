// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, start00_caption, table_to_rows, title};
use crate::export::notify_export_success;
use crate::export::pdf::PdfTable;
use crate::models::{RenderedTable, TableDescriptor};
use crate::ui::messages::info;
use std::path::Path;

/// PDF export; long tables continue on further A4 pages.
pub(crate) fn export_pdf(table: &TableDescriptor, rendered: &RenderedTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers(table);
    let rows = table_to_rows(rendered);
    let caption = start00_caption(table);

    let mut pdf = PdfTable::new();
    pdf.write_table(&title(table), caption.as_deref(), &headers, &rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
