// src/utils/text.rs

use serde_json::Value;

/// Aggressive answer normalization shared by the word-based scorers.
///
/// Trims surrounding whitespace, lowercases, and strips every character
/// that is not an ASCII letter or digit, so "Paris!" and " paris "
/// compare equal. Idempotent: normalizing an already-normalized string
/// returns it unchanged.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Emptiness check for loosely-shaped submission values.
///
/// Blank: JSON null, NaN-valued numbers, empty or whitespace-only
/// strings, empty arrays, empty objects. Not blank: `0`, `false`, and
/// every other value. Note that `serde_json` cannot represent NaN, so a
/// client-side NaN arrives as null and is caught by the null arm; the
/// number arm exists for completeness.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) => false,
        Value::Number(n) => n.as_f64().is_some_and(f64::is_nan),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
