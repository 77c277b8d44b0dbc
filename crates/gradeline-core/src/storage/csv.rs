//! CSV import: one file, one sheet.

use crate::document::{Sheet, Workbook};
use crate::error::Result;
use gradeline_engine::engine::RawCell;
use std::path::Path;

/// Load a CSV file as a single-sheet workbook named after the file stem.
///
/// The delimiter is `;` when the first non-empty line contains one (the
/// usual export format where `,` is the decimal separator), `,` otherwise.
pub fn load_csv(path: &Path) -> Result<Workbook> {
    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let delimiter = detect_delimiter(content);

    let grid: Vec<Vec<RawCell>> = content
        .lines()
        .map(|line| {
            parse_csv_line(line, delimiter)
                .iter()
                .map(|field| parse_csv_field(field))
                .collect()
        })
        .collect();

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string());

    Ok(Workbook::new(vec![Sheet::from_grid(&name, grid)]))
}

fn detect_delimiter(content: &str) -> char {
    let first = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    if first.contains(';') { ';' } else { ',' }
}

/// Parse a single CSV line, handling quoted fields
pub(crate) fn parse_csv_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
            field_was_quoted = true;
        } else if c == delimiter {
            if field_was_quoted {
                fields.push(std::mem::take(&mut current));
            } else {
                fields.push(current.trim().to_string());
                current.clear();
            }
            field_was_quoted = false;
        } else {
            current.push(c);
        }
    }
    if field_was_quoted {
        fields.push(current);
    } else {
        fields.push(current.trim().to_string());
    }
    fields
}

/// Parse a CSV field into a raw cell
/// - Empty string -> Empty
/// - Plain finite number -> Number
/// - Otherwise -> Text (left for the normalizer)
pub(crate) fn parse_csv_field(field: &str) -> RawCell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return RawCell::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => RawCell::Number(n),
        _ => RawCell::new_text(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(parse_csv_line("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(parse_csv_line("a; b ;c", ';'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        assert_eq!(
            parse_csv_line(r#"Norte,"452,74",c"#, ','),
            vec!["Norte", "452,74", "c"]
        );
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        assert_eq!(
            parse_csv_line(r#"a;"say ""hello""";c"#, ';'),
            vec!["a", r#"say "hello""#, "c"]
        );
    }

    #[test]
    fn test_parse_csv_field() {
        assert_eq!(parse_csv_field(""), RawCell::Empty);
        assert_eq!(parse_csv_field(" 42 "), RawCell::Number(42.0));
        assert_eq!(parse_csv_field("1.234"), RawCell::Number(1.234));
        assert_eq!(parse_csv_field("452,74"), RawCell::new_text("452,74"));
        assert_eq!(parse_csv_field("inf"), RawCell::new_text("inf"));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("\nRegional;R1\nNorte;1,5"), ';');
        assert_eq!(detect_delimiter("Regional,R1\n"), ',');
        assert_eq!(detect_delimiter(""), ',');
    }

    #[test]
    fn test_load_csv_semicolon_with_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Comparativo.csv");
        std::fs::write(
            &path,
            "\u{feff}Regional;1ª Avaliação;2ª Avaliação\nNorte;452,74;460\nPresença;90%;91%\n",
        )
        .unwrap();

        let wb = load_csv(&path).unwrap();
        let sheet = &wb.sheets[0];
        assert_eq!(sheet.name, "Comparativo");
        assert_eq!(sheet.header, vec!["Regional", "1ª Avaliação", "2ª Avaliação"]);
        assert_eq!(
            sheet.rows[0],
            vec![
                RawCell::new_text("Norte"),
                RawCell::new_text("452,74"),
                RawCell::Number(460.0)
            ]
        );
        assert_eq!(sheet.height(), 2);
    }
}
