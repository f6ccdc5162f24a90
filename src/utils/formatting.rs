//! Formatting utilities shared by the renderer and the exporters.

use serde_json::Value;

/// Display text of a record value.
///
/// Whole floats print without a fraction (`1.0` → `"1"`), null prints as
/// nothing, arrays and objects print as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

/// Escapes text for HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = crate::utils::table::visible_width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(visible)))
}
