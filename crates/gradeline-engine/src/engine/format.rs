use super::Value;

/// Placeholder rendered in place of any missing numeric token.
pub const MISSING_PLACEHOLDER: &str = "—";

/// Format a number for display in labels (group names, axis ticks).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "#NAN!".to_string()
    } else if n.is_infinite() {
        "#INF!".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e10 {
        format!("{:.0}", n)
    } else {
        format!("{:.2}", n)
    }
}

/// Two decimals, or the placeholder.
pub fn format_score(value: Value) -> String {
    match value {
        Value::Number(n) => format!("{:.2}", n),
        Value::Missing => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Two decimals with an explicit sign, or the placeholder.
pub fn format_signed(value: Value) -> String {
    match value {
        Value::Number(n) => format!("{:+.2}", n),
        Value::Missing => MISSING_PLACEHOLDER.to_string(),
    }
}

/// Visible point label.
///
/// Short form when there is no previous score to compare against.
pub fn format_label(value: Value, previous: Value, delta: Value, delta_pct: Value) -> String {
    if previous.is_missing() {
        format!("Nota {}", format_score(value))
    } else {
        format!(
            "Nota {} (Δ {}; {}%)",
            format_score(value),
            format_signed(delta),
            format_signed(delta_pct)
        )
    }
}

/// Hover text, one fact per line. The first line is the category and is
/// meant to be shown emphasized.
pub fn format_tooltip(category: &str, value: Value, delta: Value, delta_pct: Value) -> String {
    format!(
        "{}\nNota: {}\nVariação Absoluta: {}\nVariação Percentual: {}%",
        category,
        format_score(value),
        format_signed(delta),
        format_signed(delta_pct)
    )
}
