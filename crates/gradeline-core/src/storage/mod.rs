//! Workbook loading (spreadsheet formats via calamine, CSV) and Markdown export.

mod csv;
mod md;
mod xlsx;

pub use csv::load_csv;
pub use md::{render_markdown, write_markdown};
pub use xlsx::load_xlsx;

use crate::document::Workbook;
use crate::error::{GradelineError, Result};
use std::path::Path;

/// Load a workbook, picking the reader from the file extension.
///
/// A path that does not exist is reported as
/// [`GradelineError::FileNotFound`] before any reader is tried.
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(GradelineError::file_not_found(path));
    }

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let mut workbook = if is_csv {
        load_csv(path)?
    } else {
        load_xlsx(path)?
    };
    workbook.path = Some(path.to_path_buf());

    tracing::info!(
        path = %path.display(),
        sheets = workbook.sheets.len(),
        "loaded workbook"
    );
    Ok(workbook)
}
