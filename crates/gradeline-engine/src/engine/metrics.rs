//! Period-over-period metrics for one group.
//!
//! Rows are ordered by their category ordinal (the column position in the
//! source sheet), never by the category text.

use super::format::{format_label, format_tooltip};
use super::Value;

/// One (group, category, value) observation of the long-form table.
///
/// `category` indexes into the table's ordered category labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LongRow {
    pub group: String,
    pub category: usize,
    pub value: Value,
}

impl LongRow {
    pub fn new(group: &str, category: usize, value: Value) -> Self {
        LongRow {
            group: group.to_string(),
            category,
            value,
        }
    }
}

/// A [`LongRow`] with derived deltas and display strings.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricRow {
    pub group: String,
    pub category: usize,
    pub category_label: String,
    pub value: Value,
    pub previous: Value,
    pub delta: Value,
    pub delta_pct: Value,
    pub label: String,
    pub tooltip: String,
}

/// Build metric rows for `group`, in category order.
///
/// `categories` is the ordered label set the rows' ordinals point into.
/// Ordinals past its end get an empty label.
pub fn build_metrics(rows: &[LongRow], categories: &[String], group: &str) -> Vec<MetricRow> {
    let mut selected: Vec<&LongRow> = rows.iter().filter(|r| r.group == group).collect();
    selected.sort_by_key(|r| r.category);

    let mut previous = Value::Missing;
    let mut out = Vec::with_capacity(selected.len());
    for row in selected {
        let category_label = categories.get(row.category).cloned().unwrap_or_default();
        let delta = row.value - previous;
        let delta_pct = delta.percent_of(previous);
        out.push(MetricRow {
            group: row.group.clone(),
            category: row.category,
            label: format_label(row.value, previous, delta, delta_pct),
            tooltip: format_tooltip(&category_label, row.value, delta, delta_pct),
            category_label,
            value: row.value,
            previous,
            delta,
            delta_pct,
        });
        previous = row.value;
    }
    out
}
