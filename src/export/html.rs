//! HTML output: the table body ready to be mounted, or a whole `<table>`.

use crate::config::HtmlConfig;
use crate::models::{CellContent, RenderedTable, TableDescriptor};
use crate::utils::formatting::html_escape;

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, html_escape(class))
    }
}

/// Complete `<table>` with a header row describing each column's binding.
pub fn render_table(table: &TableDescriptor, rendered: &RenderedTable, cfg: &HtmlConfig) -> String {
    let start00 = table
        .start00
        .as_deref()
        .map(|s| format!(r#" data-start00="{}""#, html_escape(s)))
        .unwrap_or_default();

    let mut out = format!("<table{start00}>\n<thead>\n<tr>\n");
    for column in &table.columns {
        let field = column
            .field_name
            .as_deref()
            .map(|f| format!(r#" data-field-name="{}""#, html_escape(f)))
            .unwrap_or_default();
        out.push_str(&format!(
            "<th{class}{field} data-field-type=\"{ty}\">{title}</th>\n",
            class = class_attr(&column.style_class),
            ty = column.field_type.as_str(),
            title = html_escape(&column.header()),
        ));
    }
    out.push_str("</tr>\n</thead>\n");
    out.push_str(&render_tbody(rendered, cfg));
    out.push_str("</table>\n");
    out
}

/// `<tbody>` with one `<tr>` per rendered row.
pub fn render_tbody(rendered: &RenderedTable, cfg: &HtmlConfig) -> String {
    let mut out = String::from("<tbody>\n");
    for row in &rendered.rows {
        let key = row
            .key
            .as_ref()
            .map(|k| format!(r#" data-row-key="{}""#, html_escape(k.as_str())))
            .unwrap_or_default();
        out.push_str(&format!("<tr{key}>"));
        for cell in &row.cells {
            out.push_str(&format!(
                "<td{}>{}</td>",
                class_attr(&cell.class),
                render_content(&cell.content, cfg)
            ));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n");
    out
}

fn render_content(content: &CellContent, cfg: &HtmlConfig) -> String {
    match content {
        CellContent::Text { text } => html_escape(text),
        CellContent::RowNumber { number } => format!("{number}."),
        CellContent::EditAction { handler, target_id } => {
            let handler = handler
                .as_deref()
                .map(|h| format!(r#" data-handler="{}""#, html_escape(h)))
                .unwrap_or_default();
            format!(
                r#"<i{class}{handler} data-row-id="{id}"></i>"#,
                class = class_attr(&cfg.edit_class),
                id = html_escape(target_id),
            )
        }
        CellContent::Changed {
            original,
            annotations,
        } => {
            let mut html = format!(
                "<div{}>{}</div>",
                class_attr(&cfg.overridden_class),
                render_content(original, cfg)
            );
            for a in annotations {
                html.push_str(&format!(
                    r##"<div{value_class}>{value}<a href="#"{delete_class} data-change-id="{id}">{marker}</a></div>"##,
                    value_class = class_attr(&cfg.change_value_class),
                    value = html_escape(&a.value),
                    delete_class = class_attr(&cfg.delete_class),
                    id = a.change_id,
                    marker = html_escape(&cfg.delete_marker),
                ));
                html.push_str(&format!(
                    "<div{}>{}</div>",
                    class_attr(&cfg.change_user_class),
                    html_escape(&a.user_id)
                ));
                if let Some(note) = &a.note {
                    html.push_str(&format!(
                        "<div{}>{}</div>",
                        class_attr(&cfg.change_note_class),
                        html_escape(note)
                    ));
                }
            }
            html
        }
    }
}
