// src/parsing.rs
//! Field parsers: raw listing columns to canonical typed values.
//!
//! None of these functions can fail. Malformed input degrades to an empty
//! result so a single bad column never takes a whole listing view down.

use crate::types::{coerce_number, display_number, RawField};
use serde_json::Value;

/// Parses the image column into an ordered list of URLs.
///
/// Accepted encodings: a JSON array (returned as-is), a string holding a JSON
/// array, or a comma-separated string. A string that looks like JSON but does
/// not parse to an array falls back to comma splitting. URLs are not
/// validated; a broken URL renders as a broken image, not a missing one.
pub fn parse_image_list(raw: &RawField) -> Vec<String> {
    if raw.is_falsy() {
        return Vec::new();
    }

    match raw {
        RawField::List(items) => items.iter().map(value_to_string).collect(),
        RawField::Text(text) => parse_image_text(text),
        RawField::Number(n) => parse_image_text(&display_number(*n)),
        _ => Vec::new(),
    }
}

fn parse_image_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Array(items)) => return items.iter().map(value_to_string).collect(),
            Ok(_) => {
                log::debug!("Image column holds JSON that is not an array, splitting on commas")
            }
            Err(e) => log::debug!("Image column is not valid JSON ({}), splitting on commas", e),
        }
    }

    split_list(trimmed)
}

/// Parses the apartment-sizes column into positive surface areas (m²).
///
/// `null`, an empty value and the sentinel `"0"` mean "unknown". Tokens that
/// are not numbers, or are zero or negative, are dropped. Order and
/// duplicates are preserved. Pre-parsed arrays go through the same filter as
/// comma-separated strings.
pub fn parse_apartment_sizes(raw: &RawField) -> Vec<f64> {
    if raw.is_falsy() {
        return Vec::new();
    }

    match raw {
        RawField::Text(text) if text == "0" => Vec::new(),
        RawField::Text(text) => split_list(text)
            .iter()
            .filter_map(|token| coerce_number(token))
            .filter(|n| *n > 0.0)
            .collect(),
        RawField::List(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
                Value::String(s) => coerce_number(s),
                _ => None,
            })
            .filter(|n| *n > 0.0)
            .collect(),
        RawField::Number(n) if n.is_finite() && *n > 0.0 => vec![*n],
        _ => Vec::new(),
    }
}

/// Splits the free-text amenities column on commas.
///
/// Returns `None` when nothing is left, so the view can show its
/// "no information" line instead of an empty list.
pub fn parse_amenities(raw: &RawField) -> Option<Vec<String>> {
    if raw.is_falsy() {
        return None;
    }

    let parts = match raw {
        RawField::List(items) => items
            .iter()
            .map(value_to_string)
            .flat_map(|item| split_list(&item))
            .collect(),
        other => other
            .as_text()
            .map(|text| split_list(&text))
            .unwrap_or_default(),
    };

    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}

/// Comma split, trim, drop empty parts.
fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
