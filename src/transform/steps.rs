//! The four step transformations
//!
//! Each function maps string to string, is total over any input, and falls
//! back to returning the input unchanged in its degenerate case.

use crate::transform::normalize::normalize;
use crate::transform::sentence::split_sentences;

/// Ordered category rule table: a label applies when any of its keywords
/// occurs as a case-insensitive substring. Rules are independent, not
/// mutually exclusive; output order follows table order.
pub const CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("Bug Report", &["error", "fail", "bug", "issue"]),
    ("Feature Request", &["feature", "request", "idea", "improve"]),
    ("User Feedback", &["user", "customer", "client"]),
    ("Business / Sales", &["sale", "revenue", "price", "cost"]),
];

/// Label returned when no category rule matches.
pub const GENERAL_CATEGORY: &str = "General";

/// Collapse every run of whitespace to a single space, trim the edges, and
/// normalize casing. Line breaks do not survive; this is a flattening pass.
pub fn clean(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    normalize(&collapsed)
}

/// Keep the first `max_sentences` sentences, joined with a single space.
///
/// Returns the input unchanged when no sentences can be extracted.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }

    let head = sentences
        .into_iter()
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(" ");
    normalize(&head)
}

/// Bullet the first `max_points` sentences, one per line.
///
/// Returns the input unchanged when no sentences can be extracted.
pub fn extract_key_points(text: &str, max_points: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_string();
    }

    let bullets = sentences
        .into_iter()
        .take(max_points)
        .map(|s| format!("• {s}"))
        .collect::<Vec<_>>()
        .join("\n");
    normalize(&bullets)
}

/// Label the text by scanning the category rule table in order.
pub fn tag_category(text: &str) -> String {
    let haystack = text.to_lowercase();

    let labels: Vec<&str> = CATEGORY_RULES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|(label, _)| *label)
        .collect();

    if labels.is_empty() {
        GENERAL_CATEGORY.to_string()
    } else {
        labels.join(", ")
    }
}
