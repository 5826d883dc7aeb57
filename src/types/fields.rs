// src/types/fields.rs
//! Loosely-typed record fields.
//!
//! The backend stores listing columns as whatever the scraper produced: a
//! price may arrive as `350000`, `"350000"` or `null`, an image column as a
//! JSON array, a JSON-encoded string or a comma-separated string. `RawField`
//! captures any of these without failing deserialization, and offers the
//! coercions the parsers and formatters build on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A schema-loose JSON value taken verbatim from a listing record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    #[default]
    Null,
    Number(f64),
    Text(String),
    List(Vec<Value>),
    /// Booleans and objects: kept so nothing is rejected, never numeric.
    Other(Value),
}

impl RawField {
    /// True for values a browser would treat as falsy: null, `0`, `NaN`,
    /// `""` and `false`. Lists and objects are never falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            RawField::Null => true,
            RawField::Number(n) => *n == 0.0 || n.is_nan(),
            RawField::Text(s) => s.is_empty(),
            RawField::List(_) => false,
            RawField::Other(Value::Bool(b)) => !b,
            RawField::Other(Value::Null) => true,
            RawField::Other(_) => false,
        }
    }

    /// Numeric coercion shared by every formatter.
    ///
    /// Finite numbers pass through; text is trimmed and parsed as a decimal
    /// float. Blank text, booleans, lists, objects and anything that parses to
    /// a non-finite value are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawField::Number(n) if n.is_finite() => Some(*n),
            RawField::Text(s) => coerce_number(s),
            _ => None,
        }
    }

    /// Display text for free-form columns (city, region, description).
    ///
    /// Numbers are rendered the way a browser stringifies them (`75001`, not
    /// `75001.0`). Blank text and non-scalar values yield `None`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawField::Text(s) if !s.trim().is_empty() => Some(s.clone()),
            RawField::Number(n) if n.is_finite() => Some(display_number(*n)),
            _ => None,
        }
    }
}

/// Parses a trimmed token as a finite decimal number.
pub fn coerce_number(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    // `f64::from_str` also accepts "inf"/"NaN" spellings; reject them here.
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Renders a number without a trailing `.0` for integral values.
pub fn display_number(n: f64) -> String {
    if n == 0.0 {
        // Normalizes -0
        return "0".to_string();
    }
    format!("{}", n)
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        RawField::Text(s.to_string())
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        RawField::Text(s)
    }
}

impl From<f64> for RawField {
    fn from(n: f64) -> Self {
        RawField::Number(n)
    }
}

impl From<i64> for RawField {
    fn from(n: i64) -> Self {
        RawField::Number(n as f64)
    }
}

impl From<Vec<String>> for RawField {
    fn from(items: Vec<String>) -> Self {
        RawField::List(items.into_iter().map(Value::String).collect())
    }
}

impl From<Vec<f64>> for RawField {
    fn from(items: Vec<f64>) -> Self {
        RawField::List(items.into_iter().map(Value::from).collect())
    }
}

impl<T: Into<RawField>> From<Option<T>> for RawField {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawField::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_every_encoding() {
        let fields: Vec<RawField> =
            serde_json::from_value(json!([null, 12.5, "a,b", ["x"], true, {"k": 1}])).unwrap();
        assert_eq!(fields[0], RawField::Null);
        assert_eq!(fields[1], RawField::Number(12.5));
        assert_eq!(fields[2], RawField::Text("a,b".into()));
        assert_eq!(fields[3], RawField::List(vec![json!("x")]));
        assert_eq!(fields[4], RawField::Other(json!(true)));
        assert_eq!(fields[5], RawField::Other(json!({"k": 1})));
    }

    #[test]
    fn integers_deserialize_as_numbers() {
        let field: RawField = serde_json::from_value(json!(350000)).unwrap();
        assert_eq!(field.as_number(), Some(350000.0));
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(RawField::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(RawField::from("1e3").as_number(), Some(1000.0));
        assert_eq!(RawField::from("").as_number(), None);
        assert_eq!(RawField::from("abc").as_number(), None);
        assert_eq!(RawField::from("inf").as_number(), None);
        assert_eq!(RawField::from("NaN").as_number(), None);
        assert_eq!(RawField::Other(json!(true)).as_number(), None);
        assert_eq!(RawField::Null.as_number(), None);
    }

    #[test]
    fn falsiness_follows_browser_rules() {
        assert!(RawField::Null.is_falsy());
        assert!(RawField::from("").is_falsy());
        assert!(RawField::from(0.0).is_falsy());
        assert!(!RawField::from("0").is_falsy());
        assert!(!RawField::List(vec![]).is_falsy());
    }

    #[test]
    fn text_display() {
        assert_eq!(RawField::from(75001_i64).as_text().as_deref(), Some("75001"));
        assert_eq!(RawField::from(85.5).as_text().as_deref(), Some("85.5"));
        assert_eq!(RawField::from("  ").as_text(), None);
        assert_eq!(RawField::from("Lyon").as_text().as_deref(), Some("Lyon"));
    }
}
