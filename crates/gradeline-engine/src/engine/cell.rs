//! Raw spreadsheet values.
//!
//! A [`RawCell`] is whatever the reader handed us for one position in a
//! sheet: a number, a piece of text, or nothing. Only the normalizer looks
//! at these; everything downstream works on [`Value`](super::Value).

/// A single spreadsheet value as loaded from disk.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RawCell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl RawCell {
    pub fn new_text(text: &str) -> RawCell {
        RawCell::Text(text.to_string())
    }

    pub fn new_number(n: f64) -> RawCell {
        RawCell::Number(n)
    }

    /// True for empty cells and text that is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            RawCell::Number(_) => false,
        }
    }

    /// Render the cell as a label (used for the group column and headers).
    pub fn to_label(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Text(s) => s.trim().to_string(),
            RawCell::Number(n) => super::format_number(*n),
        }
    }
}
