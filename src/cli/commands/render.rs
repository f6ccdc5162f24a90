use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::{load_changes, load_records, load_table};
use crate::core::{apply_changes, filter_by_status, render};
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOptions};
use std::io::{self, IsTerminal};
use tracing::debug;

/// Handle the `render` command: load inputs, render, overlay, export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Render {
        table,
        records,
        changes,
        status,
        start00,
        format,
        file,
        force,
        plain,
    } = cmd
    else {
        return Ok(());
    };

    let mut descriptor = load_table(table)?;
    if let Some(start00) = start00 {
        descriptor.start00 = Some(start00.clone());
    }
    if descriptor.id_field.is_none() {
        descriptor.id_field = Some(cfg.id_field.clone());
    }
    if descriptor.utc_offset.is_none() {
        descriptor.utc_offset = cfg.utc_offset.clone();
    }
    descriptor.validate()?;

    let records = load_records(records)?;
    let mut rendered = render(&descriptor, &records);

    if let Some(path) = changes {
        let mut changes = load_changes(path)?;
        if let Some(status) = status {
            changes = filter_by_status(&changes, *status);
            debug!(%status, kept = changes.len(), "filtered changes by status");
        }
        rendered = apply_changes(&descriptor, rendered, &changes);
    }

    let opts = ExportOptions {
        format: format.unwrap_or(cfg.default_format),
        file: file.clone(),
        force: *force,
        color: !*plain && file.is_none() && io::stdout().is_terminal(),
    };

    ExportLogic::export(&descriptor, &rendered, &opts, &cfg.html)
}
