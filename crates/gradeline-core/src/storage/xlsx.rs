//! Spreadsheet import (.xlsx, .xlsm, .xlsb, .xls, .ods) through calamine.

use crate::document::{Sheet, Workbook};
use crate::error::Result;
use calamine::{Data, Reader, open_workbook_auto};
use gradeline_engine::engine::RawCell;
use std::path::Path;

/// Map a calamine cell to a raw cell. Error cells read as empty.
fn to_raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::Bool(b) => RawCell::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(_) | Data::Empty => RawCell::Empty,
    }
}

/// Load every worksheet, in workbook order.
pub fn load_xlsx(path: &Path) -> Result<Workbook> {
    let mut workbook = open_workbook_auto(path)?;
    let names: Vec<String> = workbook.sheet_names().to_vec();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name)?;
        let grid: Vec<Vec<RawCell>> = range
            .rows()
            .map(|row| row.iter().map(to_raw_cell).collect())
            .collect();
        let sheet = Sheet::from_grid(&name, grid);
        tracing::debug!(
            sheet = %name,
            rows = sheet.height(),
            columns = sheet.width(),
            "read worksheet"
        );
        sheets.push(sheet);
    }

    Ok(Workbook::new(sheets))
}
