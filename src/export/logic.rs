// src/export/logic.rs

use crate::config::HtmlConfig;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{to_csv, to_json};
use crate::export::model::{get_headers, table_to_rows};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, html, notify_export_success, text};
use crate::models::{RenderedTable, TableDescriptor};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Write};

/// Where and how a rendered table is written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Output file; stdout when `None` (textual formats only).
    pub file: Option<String>,
    pub force: bool,
    /// ANSI styling for the text format.
    pub color: bool,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        table: &TableDescriptor,
        rendered: &RenderedTable,
        opts: &ExportOptions,
        html_cfg: &HtmlConfig,
    ) -> AppResult<()> {
        let Some(file) = &opts.file else {
            if opts.format.needs_file() {
                return Err(AppError::MissingOutputFile(opts.format.as_str().to_string()));
            }
            let out = Self::render_to_string(table, rendered, opts.format, opts.color, html_cfg)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        };

        let path = expand_tilde(file);
        ensure_writable(&path, opts.force)?;

        match opts.format {
            ExportFormat::Xlsx => export_xlsx(table, rendered, &path)?,
            ExportFormat::Pdf => export_pdf(table, rendered, &path)?,
            textual => {
                info(format!(
                    "Exporting to {}: {}",
                    textual.as_str().to_uppercase(),
                    path.display()
                ));
                // never write escape codes into files
                let out = Self::render_to_string(table, rendered, textual, false, html_cfg)?;
                fs::write(&path, out)?;
                notify_export_success(&textual.as_str().to_uppercase(), &path);
            }
        }

        Ok(())
    }

    /// Textual rendering of a table; binary formats are rejected.
    pub fn render_to_string(
        table: &TableDescriptor,
        rendered: &RenderedTable,
        format: ExportFormat,
        color: bool,
        html_cfg: &HtmlConfig,
    ) -> AppResult<String> {
        match format {
            ExportFormat::Html => Ok(html::render_table(table, rendered, html_cfg)),
            ExportFormat::Text => Ok(text::render_text(table, rendered, color)),
            ExportFormat::Csv => to_csv(&get_headers(table), &table_to_rows(rendered)),
            ExportFormat::Json => to_json(rendered),
            ExportFormat::Xlsx | ExportFormat::Pdf => {
                Err(AppError::MissingOutputFile(format.as_str().to_string()))
            }
        }
    }
}
