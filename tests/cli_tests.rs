use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{CHANGES_JSON, RECORDS_JSON, TABLE_YAML, rtb, temp_out, write_temp};

/// Table, records and config paths for one test; the config file is not created.
fn setup(name: &str) -> (String, String, String) {
    let table = write_temp(&format!("{name}_table"), "yaml", TABLE_YAML);
    let records = write_temp(&format!("{name}_records"), "json", RECORDS_JSON);
    let cfg = temp_out(&format!("{name}_config"), "conf");
    (table, records, cfg)
}

#[test]
fn test_render_csv_to_stdout() {
    let (table, records, cfg) = setup("render_csv");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(
            "#,Id,Name,Finish,Time\n\
             1.,7,Novak Anna,3:05,2:05\n\
             2.,3,Svoboda Petr,,\n",
        );
}

#[test]
fn test_render_text_is_default_format() {
    let (table, records, cfg) = setup("render_text");

    rtb()
        .args(["--config", &cfg, "render", "--table", &table, "--records", &records])
        .assert()
        .success()
        .stdout(
            contains("Middle distance")
                .and(contains("Start 00: 2024-01-01 00:00:00"))
                .and(contains("Svoboda Petr")),
        );
}

#[test]
fn test_render_with_pending_changes() {
    let (table, records, cfg) = setup("render_pending");
    let changes = write_temp("render_pending_changes", "json", CHANGES_JSON);

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--changes",
            &changes, "--status", "pending", "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(contains(
            "1.,7,Novak Anna,3:05 => 2024-01-01T00:05:00Z (u1: checked the chip),2:05\n",
        ));
}

#[test]
fn test_render_with_all_changes_in_order() {
    let (table, records, cfg) = setup("render_all_changes");
    let changes = write_temp("render_all_changes_changes", "json", CHANGES_JSON);

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--changes",
            &changes, "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(contains(
            "3:05 => 2024-01-01T00:05:00Z (u1: checked the chip); 2024-01-01T00:04:00Z (u3)",
        ));
}

#[test]
fn test_render_html_marks_changes() {
    let (table, records, cfg) = setup("render_html");
    let changes = write_temp("render_html_changes", "json", CHANGES_JSON);

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--changes",
            &changes, "--status", "pending", "--format", "html",
        ])
        .assert()
        .success()
        .stdout(
            contains(r#"<div class="overridden-by-change">3:05</div>"#)
                .and(contains(r#"data-change-id="41""#))
                .and(contains(r#"data-change-id="42""#).not()),
        );
}

#[test]
fn test_render_start00_override() {
    let (table, records, cfg) = setup("render_start00");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--start00",
            "2024-01-01T00:01:00Z", "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(contains("1.,7,Novak Anna,2:05,2:05\n"));
}

#[test]
fn test_render_json_to_file() {
    let (table, records, cfg) = setup("render_json_file");
    let out = temp_out("render_json_file_out", "json");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--format",
            "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json output");
    let json: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_render_existing_file_needs_force() {
    let (table, records, cfg) = setup("render_force");
    let out = write_temp("render_force_out", "csv", "old content");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--format",
            "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("use --force"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old content");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--format",
            "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("#,Id,Name,Finish,Time"));
}

#[test]
fn test_render_xlsx_and_pdf_need_file() {
    let (table, records, cfg) = setup("render_binary_stdout");

    for format in ["xlsx", "pdf"] {
        rtb()
            .args([
                "--config", &cfg, "render", "--table", &table, "--records", &records,
                "--format", format,
            ])
            .assert()
            .failure()
            .stderr(contains("needs an output file"));
    }
}

#[test]
fn test_render_xlsx_file() {
    let (table, records, cfg) = setup("render_xlsx");
    let out = temp_out("render_xlsx_out", "xlsx");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--format",
            "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    assert!(Path::new(&out).exists());
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn test_render_pdf_file() {
    let (table, records, cfg) = setup("render_pdf");
    let out = temp_out("render_pdf_out", "pdf");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--format",
            "pdf", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read pdf output");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_rejects_duplicate_field() {
    let (_, records, cfg) = setup("render_dup_field");
    let table = write_temp(
        "render_dup_field_table",
        "yaml",
        "columns:\n  - field_name: finish_time\n  - field_name: finish_time\n",
    );

    rtb()
        .args(["--config", &cfg, "render", "--table", &table, "--records", &records])
        .assert()
        .failure()
        .stderr(contains("Invalid table descriptor"));
}

#[test]
fn test_render_missing_records_file() {
    let (table, _, cfg) = setup("render_missing_records");
    let records = temp_out("render_missing_records_none", "json");

    rtb()
        .args(["--config", &cfg, "render", "--table", &table, "--records", &records])
        .assert()
        .failure()
        .stderr(contains("Cannot read records"));
}

#[test]
fn test_status_requires_changes() {
    let (table, records, cfg) = setup("render_status_alone");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--status",
            "pending",
        ])
        .assert()
        .failure();
}

#[test]
fn test_elapsed_command() {
    let cfg = temp_out("elapsed_config", "conf");

    rtb()
        .args(["--config", &cfg, "elapsed", "2024-01-01T10:00:00Z", "2024-01-01T10:02:05Z"])
        .assert()
        .success()
        .stdout("2:05\n");

    rtb()
        .args([
            "--config", &cfg, "elapsed", "2024-01-01T10:00:00Z", "2024-01-01T10:02:05.250Z",
            "--ms",
        ])
        .assert()
        .success()
        .stdout("2:05.250\n");
}

#[test]
fn test_elapsed_with_utc_offset() {
    let cfg = temp_out("elapsed_offset_config", "conf");

    rtb()
        .args([
            "--config", &cfg, "elapsed", "2024-01-01 10:00:00", "2024-01-01T09:01:05Z",
            "--utc-offset", "+01:00",
        ])
        .assert()
        .success()
        .stdout("1:05\n");
}

#[test]
fn test_elapsed_unparsable_prints_empty_line() {
    let cfg = temp_out("elapsed_bad_config", "conf");

    rtb()
        .args(["--config", &cfg, "elapsed", "yesterday", "2024-01-01T10:00:00Z"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_out("init_config", "conf");

    rtb()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
    assert!(Path::new(&cfg).exists());

    rtb()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    rtb()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(
            contains("default_format: text")
                .and(contains("id_field: run_id"))
                .and(contains("overridden_class: overridden-by-change")),
        );
}

#[test]
fn test_config_default_format_is_used() {
    let (table, records, _) = setup("config_format");
    let cfg = write_temp("config_format_config", "conf", "default_format: csv\n");

    rtb()
        .args(["--config", &cfg, "render", "--table", &table, "--records", &records])
        .assert()
        .success()
        .stdout(contains("#,Id,Name,Finish,Time\n"));
}

#[test]
fn test_config_with_bad_offset_fails() {
    let cfg = write_temp("config_bad_offset", "conf", "utc_offset: sometime\n");

    rtb()
        .args(["--config", &cfg, "elapsed", "2024-01-01T10:00:00Z", "2024-01-01T10:00:01Z"])
        .assert()
        .failure()
        .stderr(contains("Invalid UTC offset"));
}

#[test]
fn test_config_needs_an_action() {
    let cfg = temp_out("config_no_action", "conf");

    rtb()
        .args(["--config", &cfg, "config"])
        .assert()
        .failure()
        .stderr(contains("--print").or(contains("--edit")));
}

#[test]
fn test_render_pdf_spreads_rows_over_pages() {
    let (table, _, cfg) = setup("render_pdf_pages");
    let records: Vec<String> = (1..=100)
        .map(|n| format!(r#"{{"run_id": {n}, "first_name": "R{n}", "last_name": "Runner"}}"#))
        .collect();
    let records = write_temp(
        "render_pdf_pages_records",
        "json",
        &format!("[{}]", records.join(",")),
    );
    let out = temp_out("render_pdf_pages_out", "pdf");

    rtb()
        .args([
            "--config", &cfg, "render", "--table", &table, "--records", &records, "--format",
            "pdf", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read pdf output");
    let has = |needle: &[u8]| bytes.windows(needle.len()).any(|w| w == needle);
    assert!(has(b"Page 1/3"));
    assert!(has(b"Page 3/3"));
    assert!(!has(b"Page 4/"));
}
