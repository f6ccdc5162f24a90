//! Time formatter: timestamp parsing, elapsed milliseconds and the `m:ss` display.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};

/// Formats carrying their own offset (RFC 3339 is tried before these).
const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Formats without offset, resolved in the caller's zone.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a calendar date-time.
///
/// Offset-less input is placed in `local_offset`, or in the machine's local
/// zone when `None`. A bare date means midnight UTC. Returns `None` for
/// anything else, including local times skipped or repeated by a DST change.
pub fn parse_timestamp(s: &str, local_offset: Option<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return resolve_local(naive, local_offset);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

fn resolve_local(naive: NaiveDateTime, local_offset: Option<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    match local_offset {
        Some(offset) => naive.and_local_timezone(offset).single(),
        None => naive
            .and_local_timezone(Local)
            .single()
            .map(|dt| dt.fixed_offset()),
    }
}

/// Milliseconds from `from` to `to`, `None` when either side does not parse.
///
/// The result is negative when `to` is earlier than `from`.
pub fn elapsed_millis(from: &str, to: &str) -> Option<i64> {
    elapsed_millis_in(from, to, None)
}

/// Like [`elapsed_millis`] with an explicit offset for zone-less timestamps.
pub fn elapsed_millis_in(from: &str, to: &str, local_offset: Option<FixedOffset>) -> Option<i64> {
    let from = parse_timestamp(from, local_offset)?;
    let to = parse_timestamp(to, local_offset)?;
    Some(to.signed_duration_since(from).num_milliseconds())
}

/// `"{minutes}:{ss}"`, or `""` when there is no value.
///
/// Minutes are unbounded and unpadded (`125000` → `"2:05"`, 2 hours → `"120:00"`).
/// Division floors, so negative input yields negative minutes with seconds
/// still in `00..59`.
pub fn format_elapsed(millis: Option<i64>) -> String {
    let Some(ms) = millis else {
        return String::new();
    };
    let sec = ms.div_euclid(1000);
    let min = sec.div_euclid(60);
    let sec = sec.rem_euclid(60);
    format!("{min}:{sec:02}")
}

/// `"{minutes}:{ss}.{mmm}"`, or `""` when there is no value.
pub fn format_elapsed_ms(millis: Option<i64>) -> String {
    let Some(ms) = millis else {
        return String::new();
    };
    let msec = ms.rem_euclid(1000);
    let sec = ms.div_euclid(1000);
    let min = sec.div_euclid(60);
    let sec = sec.rem_euclid(60);
    format!("{min}:{sec:02}.{msec:03}")
}

/// Human readable timestamp (`YYYY-MM-DD HH:MM:SS` in its own offset).
///
/// `"---"` when absent; unparsable text is returned unchanged.
pub fn display_datetime(s: Option<&str>) -> String {
    let Some(s) = s else {
        return "---".to_string();
    };
    match parse_timestamp(s, None) {
        Some(dt) => dt.format("%F %T").to_string(),
        None => s.to_string(),
    }
}
