//! Terminal output of a rendered table.

use crate::export::model::{get_headers, start00_caption, title};
use crate::models::{CellContent, RenderedTable, TableDescriptor};
use crate::utils::table::Table;
use ansi_term::{Colour, Style};

/// Aligned text table. With `color`, superseded values are struck through
/// and proposed values highlighted.
pub fn render_text(table: &TableDescriptor, rendered: &RenderedTable, color: bool) -> String {
    let mut out = String::new();

    let heading = title(table);
    if color {
        out.push_str(&Style::new().bold().paint(heading.as_str()).to_string());
    } else {
        out.push_str(&heading);
    }
    out.push('\n');
    if let Some(caption) = start00_caption(table) {
        out.push_str(&caption);
        out.push('\n');
    }
    out.push('\n');

    let mut grid = Table::new(&get_headers(table));
    for row in &rendered.rows {
        grid.add_row(
            row.cells
                .iter()
                .map(|c| cell_text(&c.content, color))
                .collect(),
        );
    }
    out.push_str(&grid.render());
    out
}

fn cell_text(content: &CellContent, color: bool) -> String {
    match content {
        CellContent::Changed {
            original,
            annotations,
        } if color => {
            let struck = Style::new()
                .strikethrough()
                .dimmed()
                .paint(original.base_text())
                .to_string();
            let proposals: Vec<String> = annotations
                .iter()
                .map(|a| {
                    let value = Colour::Red.bold().paint(a.value.as_str());
                    let user = Colour::Blue.paint(a.user_id.as_str());
                    match &a.note {
                        Some(note) => format!("{value} ({user}: {note})"),
                        None => format!("{value} ({user})"),
                    }
                })
                .collect();
            format!("{struck} => {}", proposals.join("; "))
        }
        other => other.plain_text(),
    }
}
