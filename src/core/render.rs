//! Table renderer: records → rows of cells, in input order.

use crate::core::time::{elapsed_millis_in, format_elapsed, format_elapsed_ms};
use crate::models::{
    Cell, CellContent, ColumnDescriptor, FieldType, Record, RenderedRow, RenderedTable,
    TableDescriptor,
};
use chrono::FixedOffset;
use tracing::debug;

/// Derived column: `"{last_name} {first_name}"`.
pub const NAME_FIELD: &str = "name";
/// Derived column: elapsed time from `start_time` to `finish_time`.
pub const TIME_FIELD: &str = "time";

/// Per-table values read once per render pass.
struct RenderContext<'a> {
    id_field: &'a str,
    start00: Option<&'a str>,
    offset: Option<FixedOffset>,
}

/// Renders `records` with the columns of `table`.
///
/// Produces exactly one row per record and one cell per column. Nothing is
/// carried over between calls, so rendering the same input twice gives equal
/// tables.
pub fn render(table: &TableDescriptor, records: &[Record]) -> RenderedTable {
    let ctx = RenderContext {
        id_field: table.id_field(),
        start00: table.start00.as_deref(),
        offset: table.local_offset(),
    };

    let rows: Vec<RenderedRow> = records
        .iter()
        .enumerate()
        .map(|(ix, record)| RenderedRow {
            key: record.key(ctx.id_field),
            cells: table
                .columns
                .iter()
                .map(|column| Cell {
                    class: column.style_class.clone(),
                    content: render_cell(&ctx, column, record, ix + 1),
                })
                .collect(),
        })
        .collect();

    debug!(
        rows = rows.len(),
        columns = table.columns.len(),
        "rendered table body"
    );

    RenderedTable { rows }
}

fn render_cell(
    ctx: &RenderContext<'_>,
    column: &ColumnDescriptor,
    record: &Record,
    row_no: usize,
) -> CellContent {
    match column.field_type {
        FieldType::RowNumber => return CellContent::RowNumber { number: row_no },
        FieldType::EditRow => {
            let id_field = column.extra("id_field_name").unwrap_or(ctx.id_field);
            return CellContent::EditAction {
                handler: column.extra("fn_name").map(str::to_string),
                target_id: record.display(id_field),
            };
        }
        FieldType::Plain | FieldType::RelativeToStartTime => {}
    }

    let Some(field) = column.field_name.as_deref() else {
        return CellContent::empty();
    };

    let text = match field {
        NAME_FIELD => format!(
            "{} {}",
            record.display("last_name"),
            record.display("first_name")
        ),
        TIME_FIELD => elapsed_text(
            column,
            record.get_str("start_time"),
            record.get_str("finish_time"),
            ctx.offset,
        ),
        _ if column.field_type == FieldType::RelativeToStartTime => {
            elapsed_text(column, ctx.start00, record.get_str(field), ctx.offset)
        }
        _ => record.display(field),
    };

    CellContent::Text { text }
}

fn elapsed_text(
    column: &ColumnDescriptor,
    from: Option<&str>,
    to: Option<&str>,
    offset: Option<FixedOffset>,
) -> String {
    let millis = match (from, to) {
        (Some(from), Some(to)) => elapsed_millis_in(from, to, offset),
        _ => None,
    };
    if column.wants_millis() {
        format_elapsed_ms(millis)
    } else {
        format_elapsed(millis)
    }
}
