// src/export/mod.rs

mod fs_utils;
pub mod html;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
pub mod text;
mod xlsx;

pub use logic::{ExportLogic, ExportOptions};

use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Text,
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Binary formats can only be written to a file.
    pub fn needs_file(&self) -> bool {
        matches!(self, ExportFormat::Xlsx | ExportFormat::Pdf)
    }
}
