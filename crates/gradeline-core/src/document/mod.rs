//! Workbook model, reshaping and the selection-driven view (UI-agnostic).

mod reshape;
mod sheet;
mod view;

pub use reshape::{LongTable, ReshapeOptions, reshape};
pub use sheet::{Sheet, Workbook, column_letters};
pub use view::{AxisLabels, ChartView, Dashboard};
