//! Locale-aware number parsing.
//!
//! Scores arrive either as real numbers or as text written with Brazilian
//! conventions (`1.234,56`, `R$ 10,5`, `87,3%`) mixed with English ones
//! (`1,234.56`). The rules:
//!
//! - both `,` and `.` present: the later one is the decimal separator,
//!   the other is thousands grouping and is dropped;
//! - only `,` present: `,` is decimal, any `.` is dropped;
//! - otherwise `,` is dropped and `.` stays decimal. So `"1.234"` is
//!   `1.234`, never `1234`.

use super::{RawCell, Value};

const STRIPPED_MARKERS: [&str; 2] = ["R$", "%"];

/// Normalize a raw cell into a [`Value`]. Never fails.
pub fn normalize(cell: &RawCell) -> Value {
    match cell {
        RawCell::Number(n) => Value::from_f64(*n),
        RawCell::Text(s) => normalize_str(s),
        RawCell::Empty => Value::Missing,
    }
}

/// Parse locale-formatted numeric text. Unparseable input is `Missing`.
pub fn normalize_str(text: &str) -> Value {
    let mut s: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}'))
        .collect();
    for marker in STRIPPED_MARKERS {
        s = s.replace(marker, "");
    }

    let canonical = match (s.rfind(','), s.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => s.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => s.replace(',', ""),
        (Some(_), None) => s.replace(',', "."),
        (None, _) => s,
    };

    if canonical.is_empty() {
        return Value::Missing;
    }
    canonical
        .parse::<f64>()
        .map_or(Value::Missing, Value::from_f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Option<f64> {
        normalize_str(s).as_f64()
    }

    #[test]
    fn comma_decimal() {
        assert_eq!(num("452,74"), Some(452.74));
        assert_eq!(num("0,5"), Some(0.5));
    }

    #[test]
    fn later_separator_is_decimal() {
        assert_eq!(num("1.234,56"), Some(1234.56));
        assert_eq!(num("1,234.56"), Some(1234.56));
        assert_eq!(num("12.345.678,9"), Some(12345678.9));
        assert_eq!(num("12,345,678.9"), Some(12345678.9));
    }

    #[test]
    fn dot_only_stays_decimal() {
        assert_eq!(num("1.234"), Some(1.234));
        assert_eq!(num("87.5"), Some(87.5));
    }

    #[test]
    fn comma_only_grouping_is_read_as_decimal() {
        // Only the last comma survives as the decimal point; "1,234,567" is
        // not a number under these rules.
        assert_eq!(num("1,234,567"), None);
    }

    #[test]
    fn strips_currency_percent_and_spaces() {
        assert_eq!(num("R$ 1.234,56"), Some(1234.56));
        assert_eq!(num("87,3%"), Some(87.3));
        assert_eq!(num(" 1\u{a0}234,5 "), Some(1234.5));
        assert_eq!(num("\t42\n"), Some(42.0));
        assert_eq!(num("-3,5"), Some(-3.5));
    }

    #[test]
    fn garbage_is_missing() {
        assert_eq!(normalize_str(""), Value::Missing);
        assert_eq!(normalize_str("   "), Value::Missing);
        assert_eq!(normalize_str("abc"), Value::Missing);
        assert_eq!(normalize_str("R$"), Value::Missing);
        assert_eq!(normalize_str("%"), Value::Missing);
        assert_eq!(normalize_str("nan"), Value::Missing);
    }

    #[test]
    fn raw_cells() {
        assert_eq!(normalize(&RawCell::Empty), Value::Missing);
        assert_eq!(normalize(&RawCell::new_number(7.25)), Value::Number(7.25));
        assert_eq!(normalize(&RawCell::new_number(f64::NAN)), Value::Missing);
        assert_eq!(normalize(&RawCell::new_text("7,25")), Value::Number(7.25));
    }

    #[test]
    fn numbers_pass_through_unchanged() {
        for n in [0.0, -1.5, 452.74, 1e12, f64::MIN_POSITIVE] {
            assert_eq!(normalize(&RawCell::new_number(n)), Value::Number(n));
        }
    }

    #[test]
    fn deterministic() {
        for s in ["1.234,56", "x", "", "9,9%"] {
            assert_eq!(normalize_str(s), normalize_str(s));
        }
    }
}
