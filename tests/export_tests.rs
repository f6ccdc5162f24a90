use racetable::config::HtmlConfig;
use racetable::export::html::render_tbody;
use racetable::export::{ExportFormat, ExportLogic};
use racetable::models::{ColumnDescriptor, RenderedTable, TableDescriptor};
use racetable::{apply_changes, render};
use serde_json::Value;

mod common;
use common::{finish_change, results_table, runs};

fn rendered_with_change() -> (TableDescriptor, RenderedTable) {
    let table = results_table();
    let changes = vec![
        finish_change(41, 7, "2024-01-01T00:05:00Z", "u1").with_note("checked <chip>"),
    ];
    let rendered = apply_changes(&table, render(&table, &runs()), &changes);
    (table, rendered)
}

fn export(format: ExportFormat) -> String {
    let (table, rendered) = rendered_with_change();
    ExportLogic::render_to_string(&table, &rendered, format, false, &HtmlConfig::default())
        .expect("textual export")
}

#[test]
fn test_html_header_describes_columns() {
    let html = export(ExportFormat::Html);
    assert!(html.starts_with(r#"<table data-start00="2024-01-01T00:00:00Z">"#));
    assert!(html.contains(r#"<th class="w3-right-align" data-field-type="RowNumber">#</th>"#));
    assert!(html.contains(
        r#"<th data-field-name="finish_time" data-field-type="RelativeToStartTime">Finish</th>"#
    ));
}

#[test]
fn test_html_rows_and_edit_action() {
    let html = export(ExportFormat::Html);
    assert!(html.contains(r#"<tr data-row-key="7"><td class="w3-right-align">1.</td>"#));
    assert!(html.contains(
        r#"<i class="w3-button w3-round w3-theme fa fa-pencil" data-handler="editRun" data-row-id="12"></i>"#
    ));
}

#[test]
fn test_html_changed_cell_markup() {
    let html = export(ExportFormat::Html);
    assert!(html.contains(r#"<div class="overridden-by-change">3:05</div>"#));
    assert!(html.contains(
        r##"<div class="change-value">2024-01-01T00:05:00Z<a href="#" class="delete-change" data-change-id="41">❌</a></div>"##
    ));
    assert!(html.contains(r#"<div class="change-user w3-small">u1</div>"#));
    assert!(html.contains(r#"<div class="change-note w3-small">checked &lt;chip&gt;</div>"#));
}

#[test]
fn test_html_escapes_record_values() {
    let table = TableDescriptor::new(vec![ColumnDescriptor::field("club")]);
    let records = vec![racetable::models::Record::new()
        .with("run_id", 1)
        .with("club", "<b>\"OK\" & co</b>")];
    let html = render_tbody(&render(&table, &records), &HtmlConfig::default());

    assert!(html.contains("<td>&lt;b&gt;&quot;OK&quot; &amp; co&lt;/b&gt;</td>"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_html_uses_configured_classes() {
    let (_, rendered) = rendered_with_change();
    let cfg = HtmlConfig {
        overridden_class: "old".to_string(),
        delete_marker: "x".to_string(),
        ..HtmlConfig::default()
    };
    let html = render_tbody(&rendered, &cfg);
    assert!(html.contains(r#"<div class="old">3:05</div>"#));
    assert!(html.contains(r#"data-change-id="41">x</a>"#));
}

#[test]
fn test_csv_export() {
    let csv = export(ExportFormat::Csv);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "#,Id,Name,Class,Start,Finish,Time,");
    assert_eq!(
        lines[1],
        "1.,7,Novak Anna,D21,1:00,3:05 => 2024-01-01T00:05:00Z (u1: checked <chip>),2:05,"
    );
    assert_eq!(lines[2], "2.,3,Svoboda Petr,H21,2:00,,,");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_json_export() {
    let json: Value = serde_json::from_str(&export(ExportFormat::Json)).unwrap();
    let rows = json["rows"].as_array().unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["key"], "7");
    assert_eq!(rows[0]["cells"][0]["content"]["kind"], "row_number");
    let finish = &rows[0]["cells"][5]["content"];
    assert_eq!(finish["kind"], "changed");
    assert_eq!(finish["original"]["text"], "3:05");
    assert_eq!(finish["annotations"][0]["change_id"], 41);
    assert_eq!(finish["annotations"][0]["user_id"], "u1");
}

#[test]
fn test_text_export() {
    let text = export(ExportFormat::Text);

    assert!(text.starts_with("Results\nStart 00: 2024-01-01 00:00:00\n"));
    assert!(text.contains("Novak Anna"));
    assert!(text.contains("3:05 => 2024-01-01T00:05:00Z (u1: checked <chip>)"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_text_export_with_color_styles_changes() {
    let (table, rendered) = rendered_with_change();
    let text = racetable::export::text::render_text(&table, &rendered, true);
    assert!(text.contains('\x1b'));
}

#[test]
fn test_binary_formats_need_a_file() {
    let (table, rendered) = rendered_with_change();
    for format in [ExportFormat::Xlsx, ExportFormat::Pdf] {
        let res =
            ExportLogic::render_to_string(&table, &rendered, format, false, &HtmlConfig::default());
        assert!(res.is_err());
    }
}
