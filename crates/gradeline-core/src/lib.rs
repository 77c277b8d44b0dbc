//! gradeline-core - UI-agnostic workbook model, reshaping and storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{AxisLabels, ChartView, Dashboard, LongTable, ReshapeOptions, Sheet, Workbook};
pub use error::{GradelineError, Result};
