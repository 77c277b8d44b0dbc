//! Error types for Gradeline core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying a workbook.
///
/// A cell that does not parse as a number is not an error; it becomes a
/// missing score.
#[derive(Error, Debug)]
pub enum GradelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arquivo não encontrado: {name}.")]
    FileNotFound { path: PathBuf, name: String },

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook has no sheets")]
    EmptyWorkbook,

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Group '{group}' not found in sheet '{sheet}'")]
    GroupNotFound { sheet: String, group: String },
}

impl GradelineError {
    pub fn file_not_found(path: &std::path::Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        GradelineError::FileNotFound {
            path: path.to_path_buf(),
            name,
        }
    }
}

pub type Result<T> = std::result::Result<T, GradelineError>;
