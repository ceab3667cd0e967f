// src/naming.rs

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Derive a row label from its first cell: trim, collapse every whitespace
/// run to `_`, upper-case. Anything that is not whitespace (hyphens, dots)
/// is kept as-is.
pub fn label_name(raw: &str) -> String {
    WHITESPACE_RUN
        .replace_all(raw.trim(), "_")
        .to_uppercase()
}

/// `error_code` → `ErrorCode`
pub fn big_hump(s: &str) -> String {
    hump(s, false)
}

/// `error_code` → `errorCode`
pub fn small_hump(s: &str) -> String {
    hump(s, true)
}

/// `http status` / `http-status` → `http_status`. Case is kept.
pub fn snake_name(s: &str) -> String {
    s.split([' ', '_', '-'])
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn hump(s: &str, small: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for (idx, word) in s.split([' ', '_', '-']).enumerate() {
        if idx == 0 && small {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Upper-case the first character, leave the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
