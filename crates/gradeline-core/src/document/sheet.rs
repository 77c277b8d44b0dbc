use gradeline_engine::engine::RawCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Spreadsheet column name for a zero-based index (0 -> A, 26 -> AA).
pub fn column_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

/// One named, rectangular sheet: a header row plus data rows.
///
/// Every row has exactly `header.len()` cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl Sheet {
    /// Build a sheet from raw grid rows; the first non-blank row is the header.
    ///
    /// Blank rows are skipped, blank header cells are named after their
    /// column letters and repeated header labels get a ` (n)` suffix so the
    /// header stays a unique, ordered label set.
    pub fn from_grid(name: &str, grid: Vec<Vec<RawCell>>) -> Sheet {
        let mut rows = grid
            .into_iter()
            .filter(|row| !row.iter().all(RawCell::is_blank));

        let Some(header_cells) = rows.next() else {
            return Sheet {
                name: name.to_string(),
                ..Sheet::default()
            };
        };
        let mut rows: Vec<Vec<RawCell>> = rows.collect();

        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header_cells.len()))
            .max()
            .unwrap_or(0);

        let mut seen: HashMap<String, usize> = HashMap::new();
        let header = (0..width)
            .map(|col| {
                let label = header_cells
                    .get(col)
                    .map(RawCell::to_label)
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| column_letters(col));
                let count = seen.entry(label.clone()).or_insert(0);
                *count += 1;
                if *count == 1 {
                    label
                } else {
                    format!("{} ({})", label, count)
                }
            })
            .collect();

        for row in &mut rows {
            row.resize(width, RawCell::Empty);
        }

        Sheet {
            name: name.to_string(),
            header,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.header.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// A loaded workbook: sheets in file order.
#[derive(Clone, Debug, Default)]
pub struct Workbook {
    pub path: Option<PathBuf>,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Workbook { path: None, sheets }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
