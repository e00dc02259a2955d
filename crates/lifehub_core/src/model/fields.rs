//! Form-boundary field helpers.
//!
//! # Responsibility
//! - Turn comma-separated free text into clean value lists.
//! - Normalize tag/attendee lists before they reach a store.

/// Splits comma-separated form input into trimmed, non-empty values.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims entries, drops blanks and deduplicates preserving first occurrence.
pub fn normalize_list(values: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|existing: &String| existing == trimmed) {
            seen.push(trimmed.to_string());
        }
    }
    seen
}
