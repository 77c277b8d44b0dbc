//! Wide sheet -> long (group, category, value) table.

use super::Sheet;
use gradeline_engine::engine::{LongRow, MetricRow, RawCell, Value, build_metrics, normalize};

/// How to read a sheet's first column and trailing metadata row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReshapeOptions {
    /// Name given to the first (group) column.
    pub group_label: String,
    /// Case-insensitive substring marking a trailing attendance row.
    /// Empty disables the check.
    pub attendance_marker: String,
}

impl Default for ReshapeOptions {
    fn default() -> Self {
        ReshapeOptions {
            group_label: "Group".to_string(),
            attendance_marker: "presen".to_string(),
        }
    }
}

/// Long-form scores for one sheet.
///
/// `categories` keeps the sheet's column order; `LongRow::category`
/// indexes into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LongTable {
    pub group_label: String,
    pub categories: Vec<String>,
    pub rows: Vec<LongRow>,
}

impl LongTable {
    /// Sorted, distinct, non-empty group labels.
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self
            .rows
            .iter()
            .filter(|r| !r.group.is_empty())
            .map(|r| r.group.clone())
            .collect();
        groups.sort();
        groups.dedup();
        groups
    }

    pub fn metrics(&self, group: &str) -> Vec<MetricRow> {
        build_metrics(&self.rows, &self.categories, group)
    }
}

fn is_attendance_row(row: &[RawCell], marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    row.first()
        .map(|cell| cell.to_label().to_lowercase())
        .is_some_and(|label| label.contains(&marker.to_lowercase()))
}

/// Reshape a sheet into a [`LongTable`].
///
/// A last row whose group cell contains the attendance marker is dropped.
/// Every remaining category cell goes through the normalizer; cells that
/// do not parse become missing values.
pub fn reshape(sheet: &Sheet, options: &ReshapeOptions) -> LongTable {
    let categories: Vec<String> = sheet.header.iter().skip(1).cloned().collect();

    let mut data: &[Vec<RawCell>] = &sheet.rows;
    if let Some((last, rest)) = data.split_last()
        && is_attendance_row(last, &options.attendance_marker)
    {
        tracing::debug!(sheet = %sheet.name, label = %last[0].to_label(), "dropping attendance row");
        data = rest;
    }

    let groups: Vec<String> = data
        .iter()
        .map(|row| row.first().map(RawCell::to_label).unwrap_or_default())
        .collect();

    let mut rows = Vec::with_capacity(data.len() * categories.len());
    let mut unparsed = 0usize;
    for category in 0..categories.len() {
        for (row, group) in data.iter().zip(&groups) {
            let cell = row.get(category + 1).unwrap_or(&RawCell::Empty);
            let value = normalize(cell);
            if value == Value::Missing && matches!(cell, RawCell::Text(s) if !s.trim().is_empty()) {
                unparsed += 1;
            }
            rows.push(LongRow {
                group: group.clone(),
                category,
                value,
            });
        }
    }

    if unparsed > 0 {
        tracing::debug!(sheet = %sheet.name, unparsed, "cells did not parse as numbers");
    }
    tracing::debug!(
        sheet = %sheet.name,
        groups = data.len(),
        categories = categories.len(),
        rows = rows.len(),
        "reshaped sheet"
    );

    LongTable {
        group_label: options.group_label.clone(),
        categories,
        rows,
    }
}
