//! Reformatting of the model's "DD/MM/YYYY HH:mm:ss" stamps.

use std::sync::LazyLock;

use regex::Regex;

static PT_DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2})/(\d{2})/(\d{4})\s+(\d{2}):(\d{2}):(\d{2})").unwrap()
});

/// Reorders a "DD/MM/YYYY HH:mm:ss" stamp into "YYYY-MM-DD HH:mm:ss".
/// Purely syntactic: digit groups are not range-checked, so a stamp like
/// "32/13/2024 ..." passes through as written. Unmatchable input yields "".
pub fn pt_to_iso(text: &str) -> String {
    match PT_DATETIME_RE.captures(text) {
        Some(c) => format!(
            "{}-{}-{} {}:{}:{}",
            &c[3], &c[2], &c[1], &c[4], &c[5], &c[6]
        ),
        None => String::new(),
    }
}
