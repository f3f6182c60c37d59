//! Whitespace and casing normalization
//!
//! Applied to the raw input once and to every step's output. Works line by
//! line so the bullet structure produced by key-point extraction survives.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// First lowercase letter after optional leading whitespace and an optional
// bullet marker.
static LINE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*(?:[•-]\s*)?)(\p{Ll})").expect("line-start pattern is valid")
});

// Lowercase letter following sentence-ending punctuation and whitespace.
static SENTENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?]\s+)(\p{Ll})").expect("sentence-start pattern is valid"));

/// Normalize casing at line starts and sentence boundaries.
///
/// Empty or whitespace-only input is returned unchanged. The function is
/// pure, total, and idempotent.
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    text.split('\n')
        .map(capitalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize_line(line: &str) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }

    let line = LINE_START.replace(line, |caps: &Captures<'_>| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });

    SENTENCE_START
        .replace_all(&line, |caps: &Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}
