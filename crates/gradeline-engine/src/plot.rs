//! Chart data preparation.
//!
//! [`PlotData`] turns a metric sequence into frontend-agnostic line chart
//! data: x is the category ordinal position, y is the score. Missing scores
//! break the line, so points are grouped into contiguous segments.

use crate::engine::MetricRow;

/// Prepared data for rendering a line chart (frontend-agnostic).
#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    /// Category labels along the x axis, in chart order.
    pub categories: Vec<String>,
    /// Visible point labels, one per category.
    pub labels: Vec<String>,
    /// Runs of consecutive defined points as (x, y) pairs.
    pub segments: Vec<Vec<(f32, f32)>>,
    /// X-axis range (min, max).
    pub x_range: (f32, f32),
    /// Y-axis range (min, max).
    pub y_range: (f32, f32),
    /// Warnings about data quality (e.g., missing scores).
    pub warnings: Vec<String>,
}

impl PlotData {
    /// Prepare chart data from metric rows already in category order.
    pub fn from_metrics(rows: &[MetricRow]) -> Result<Self, String> {
        let mut segments: Vec<Vec<(f32, f32)>> = Vec::new();
        let mut current: Vec<(f32, f32)> = Vec::new();
        let mut missing_count = 0;

        for (i, row) in rows.iter().enumerate() {
            match row.value.as_f64() {
                Some(v) => current.push((i as f32, v as f32)),
                None => {
                    missing_count += 1;
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        if segments.is_empty() {
            return Err("No scores to plot".to_string());
        }

        let mut warnings = Vec::new();
        if missing_count > 0 {
            warnings.push(format!("{} missing score(s) not plotted", missing_count));
        }

        let (mut ymin, mut ymax) = (f32::INFINITY, f32::NEG_INFINITY);
        for (_, y) in segments.iter().flatten() {
            ymin = ymin.min(*y);
            ymax = ymax.max(*y);
        }

        // Ensure non-zero ranges
        let xmin = 0.0;
        let mut xmax = rows.len().saturating_sub(1) as f32;
        if xmax == xmin {
            xmax = xmin + 1.0;
        }
        if ymax == ymin {
            ymax = ymin + 1.0;
        }

        Ok(PlotData {
            categories: rows.iter().map(|r| r.category_label.clone()).collect(),
            labels: rows.iter().map(|r| r.label.clone()).collect(),
            segments,
            x_range: (xmin, xmax),
            y_range: (ymin, ymax),
            warnings,
        })
    }

    /// The plotted point at category position `index`, if its score exists.
    pub fn point_at(&self, index: usize) -> Option<(f32, f32)> {
        let x = index as f32;
        self.segments
            .iter()
            .flatten()
            .find(|(px, _)| *px == x)
            .copied()
    }

    /// Category label for an x-axis position, if it lands on a category.
    pub fn category_at(&self, x: f32) -> Option<&str> {
        let idx = x.round();
        if idx < 0.0 || (x - idx).abs() > 0.05 {
            return None;
        }
        self.categories.get(idx as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{LongRow, Value, build_metrics};

    fn metrics(values: &[Value]) -> Vec<MetricRow> {
        let cats: Vec<String> = (1..=values.len()).map(|i| format!("R{}", i)).collect();
        let rows: Vec<LongRow> = values
            .iter()
            .enumerate()
            .map(|(i, v)| LongRow::new("G", i, *v))
            .collect();
        build_metrics(&rows, &cats, "G")
    }

    #[test]
    fn missing_scores_split_segments() {
        let data = PlotData::from_metrics(&metrics(&[
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Missing,
            Value::Number(4.0),
        ]))
        .unwrap();

        assert_eq!(
            data.segments,
            vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(3.0, 4.0)]]
        );
        assert_eq!(data.x_range, (0.0, 3.0));
        assert_eq!(data.y_range, (1.0, 4.0));
        assert_eq!(data.warnings, vec!["1 missing score(s) not plotted"]);
        assert_eq!(data.point_at(2), None);
        assert_eq!(data.point_at(3), Some((3.0, 4.0)));
    }

    #[test]
    fn single_point_gets_nonzero_ranges() {
        let data = PlotData::from_metrics(&metrics(&[Value::Number(7.0)])).unwrap();
        assert_eq!(data.x_range, (0.0, 1.0));
        assert_eq!(data.y_range, (7.0, 8.0));
        assert_eq!(data.labels, vec!["Nota 7.00"]);
    }

    #[test]
    fn all_missing_is_an_error() {
        assert!(PlotData::from_metrics(&metrics(&[Value::Missing, Value::Missing])).is_err());
        assert!(PlotData::from_metrics(&[]).is_err());
    }

    #[test]
    fn category_lookup_snaps_to_ordinals() {
        let data =
            PlotData::from_metrics(&metrics(&[Value::Number(1.0), Value::Number(2.0)])).unwrap();
        assert_eq!(data.category_at(0.0), Some("R1"));
        assert_eq!(data.category_at(1.01), Some("R2"));
        assert_eq!(data.category_at(0.5), None);
        assert_eq!(data.category_at(5.0), None);
    }
}
