// src/formatting/numbers.rs
//! Locale formatting for prices, rates and surface areas.
//!
//! Amounts are always rendered in euros with French grouping
//! (`300 000 €`), whatever locale the terminal runs in. Every formatter takes
//! the raw column and absorbs anything non-numeric.

use crate::constants::{
    AREA_UNIT, CURRENCY_SPACING, CURRENCY_SYMBOL, GROUP_SEPARATOR, NOT_AVAILABLE,
};
use crate::types::{display_number, RawField};

/// Formats an amount as whole euros, or `N/A` when it is not a number.
pub fn format_currency(value: &RawField) -> String {
    match value.as_number() {
        Some(n) => format_euros(n),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a fraction as a percentage with one decimal (`0.123` → `12.3 %`).
pub fn format_percentage(value: &RawField) -> String {
    match value.as_number() {
        Some(n) => {
            let tenths = (n * 1000.0).round() / 10.0;
            // Avoid printing "-0.0 %" for tiny negative rates
            let tenths = if tenths == 0.0 { 0.0 } else { tenths };
            format!("{:.1} %", tenths)
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Price per square meter, or `None` when either side is missing or not
/// strictly positive.
///
/// Unlike the other formatters this never yields `N/A`: the figure is
/// secondary and the view omits it entirely.
pub fn format_price_per_area(price: &RawField, area: &RawField) -> Option<String> {
    let price = price.as_number().filter(|p| *p > 0.0)?;
    let area = area.as_number().filter(|a| *a > 0.0)?;
    Some(format_euros(price / area))
}

/// Formats a surface area (`85.5 m²`), or `N/A`.
pub fn format_area(area: &RawField) -> String {
    match area.as_number().filter(|a| *a > 0.0) {
        Some(a) => format!("{} {}", display_number(a), AREA_UNIT),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Whole euros, rounded half away from zero, grouped by thousands.
pub fn format_euros(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}{}",
        sign,
        group_thousands(&digits),
        CURRENCY_SPACING,
        CURRENCY_SYMBOL
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * GROUP_SEPARATOR.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(&300000.0.into()), "300\u{202F}000\u{a0}€");
        assert_eq!(format_currency(&1234567.0.into()), "1\u{202F}234\u{202F}567\u{a0}€");
        assert_eq!(format_currency(&999.0.into()), "999\u{a0}€");
        assert_eq!(format_currency(&0.0.into()), "0\u{a0}€");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(&2.5.into()), "3\u{a0}€");
        assert_eq!(format_currency(&(-1500.5).into()), "-1\u{202F}501\u{a0}€");
    }

    #[test]
    fn currency_accepts_numeric_text() {
        assert_eq!(format_currency(&"350000".into()), "350\u{202F}000\u{a0}€");
    }

    #[test]
    fn non_numeric_values_are_not_available() {
        for raw in [
            RawField::Null,
            RawField::from("abc"),
            RawField::from(""),
            RawField::Other(json!(true)),
            RawField::List(vec![json!(1)]),
        ] {
            assert_eq!(format_currency(&raw), "N/A");
            assert_eq!(format_percentage(&raw), "N/A");
        }
    }

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(format_percentage(&0.123.into()), "12.3 %");
        assert_eq!(format_percentage(&0.05.into()), "5.0 %");
        assert_eq!(format_percentage(&1.0.into()), "100.0 %");
        assert_eq!(format_percentage(&0.0.into()), "0.0 %");
    }

    #[test]
    fn price_per_area() {
        assert_eq!(
            format_price_per_area(&300000.0.into(), &100.0.into()),
            Some(format_currency(&3000.0.into()))
        );
        assert_eq!(format_price_per_area(&300000.0.into(), &0.0.into()), None);
        assert_eq!(format_price_per_area(&300000.0.into(), &(-5.0).into()), None);
        assert_eq!(format_price_per_area(&0.0.into(), &100.0.into()), None);
        assert_eq!(format_price_per_area(&RawField::Null, &100.0.into()), None);
        assert_eq!(format_price_per_area(&"abc".into(), &100.0.into()), None);
    }

    #[test]
    fn area() {
        assert_eq!(format_area(&120.0.into()), "120 m²");
        assert_eq!(format_area(&"85.5".into()), "85.5 m²");
        assert_eq!(format_area(&RawField::Null), "N/A");
        assert_eq!(format_area(&0.0.into()), "N/A");
    }
}
