//! Helpers for settings read out of the process environment.

use strip_ansi_escapes::strip;

/// Strips terminal escape codes that launch scripts sometimes leak into values.
pub fn clean(raw: &str) -> String {
    String::from_utf8_lossy(&strip(raw.as_bytes())).trim().to_string()
}

/// `1`/`true`/`yes` (any case) are true, `0`/`false`/`no` are false.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
