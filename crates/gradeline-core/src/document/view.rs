//! Selection-driven chart views.
//!
//! [`Dashboard::view`] is a pure function of `(sheet, group)`: it reshapes
//! the sheet and rebuilds the metrics on every call. Frontends hold only the
//! current selection and ask for a fresh view whenever it changes.

use super::{LongTable, ReshapeOptions, Workbook, reshape};
use crate::error::{GradelineError, Result};
use gradeline_engine::engine::MetricRow;
use gradeline_engine::plot::PlotData;

/// Axis titles shown by frontends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisLabels {
    pub category: String,
    pub value: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        AxisLabels {
            category: "Avaliação".to_string(),
            value: "Nota".to_string(),
        }
    }
}

/// Everything a frontend needs to draw one (sheet, group) selection.
#[derive(Clone, Debug)]
pub struct ChartView {
    pub sheet: String,
    /// Selected group; `None` when the sheet has no groups at all.
    pub group: Option<String>,
    /// Selectable groups for this sheet, sorted.
    pub groups: Vec<String>,
    pub group_label: String,
    pub axis: AxisLabels,
    /// Metric rows in category order.
    pub rows: Vec<MetricRow>,
    /// Chart data, or why there is nothing to draw.
    pub plot: std::result::Result<PlotData, String>,
}

/// A loaded workbook plus the options used to interpret its sheets.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub workbook: Workbook,
    pub options: ReshapeOptions,
    pub axis: AxisLabels,
}

impl Dashboard {
    /// Wrap a workbook. A workbook without sheets cannot be shown.
    pub fn new(workbook: Workbook, options: ReshapeOptions, axis: AxisLabels) -> Result<Self> {
        if workbook.sheets.is_empty() {
            return Err(GradelineError::EmptyWorkbook);
        }
        Ok(Dashboard {
            workbook,
            options,
            axis,
        })
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.workbook.sheet_names()
    }

    /// Reshape the named sheet.
    pub fn table(&self, sheet: &str) -> Result<LongTable> {
        let s = self
            .workbook
            .sheet(sheet)
            .ok_or_else(|| GradelineError::SheetNotFound(sheet.to_string()))?;
        Ok(reshape(s, &self.options))
    }

    pub fn groups(&self, sheet: &str) -> Result<Vec<String>> {
        Ok(self.table(sheet)?.groups())
    }

    /// Build the view for `sheet` and `group`.
    ///
    /// With no group given, the first group alphabetically is used.
    pub fn view(&self, sheet: &str, group: Option<&str>) -> Result<ChartView> {
        let table = self.table(sheet)?;
        let groups = table.groups();

        let group = match group {
            Some(g) if groups.iter().any(|x| x == g) => Some(g.to_string()),
            Some(g) => {
                return Err(GradelineError::GroupNotFound {
                    sheet: sheet.to_string(),
                    group: g.to_string(),
                });
            }
            None => groups.first().cloned(),
        };

        let (rows, plot) = match &group {
            Some(g) => {
                let rows = table.metrics(g);
                let plot = PlotData::from_metrics(&rows);
                (rows, plot)
            }
            None => (Vec::new(), Err("No groups in this sheet".to_string())),
        };

        Ok(ChartView {
            sheet: sheet.to_string(),
            group,
            groups,
            group_label: table.group_label,
            axis: self.axis.clone(),
            rows,
            plot,
        })
    }
}
