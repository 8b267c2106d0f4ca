use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{ValidationRecord, ValidationTable};

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong inside a trace file.  A bad row aborts
/// the whole load; nothing is plotted from malformed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("line {line}: expected 3 columns, found {found}")]
    ColumnCount { line: usize, found: usize },
    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },
    #[error("no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a validation trace from a whitespace-delimited text file.
///
/// Expected layout: one row per sample, three real numbers per row,
/// `reference estimate relative_error`, no header.
pub fn load_table(path: &Path) -> Result<ValidationTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let table =
        parse_table(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(table)
}

/// Parse the trace text.  Blank lines and `#`-comment lines are skipped;
/// every remaining line must hold exactly three parseable reals.
pub fn parse_table(text: &str) -> Result<ValidationTable, TableError> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(TableError::ColumnCount {
                line: line_no,
                found: tokens.len(),
            });
        }

        let mut values = [0.0_f64; 3];
        for (slot, tok) in values.iter_mut().zip(&tokens) {
            *slot = tok.parse().map_err(|_| TableError::InvalidNumber {
                line: line_no,
                token: tok.to_string(),
            })?;
        }

        records.push(ValidationRecord {
            reference: values[0],
            estimate: values[1],
            relative_error: values[2],
        });
    }

    if records.is_empty() {
        return Err(TableError::Empty);
    }
    Ok(ValidationTable::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_trace() {
        let text = "\
# produced by the table validator
1.0 0.99 0.01

-2.5e-1 -2.4e-1 -0.04
0 0 0
";
        let table = parse_table(text).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.references(), vec![1.0, -0.25, 0.0]);
        assert_eq!(table.estimates(), vec![0.99, -0.24, 0.0]);
        assert_eq!(table.relative_errors(), vec![0.01, -0.04, 0.0]);
    }

    #[test]
    fn rejects_short_row() {
        let err = parse_table("1.0 2.0 0.5\n3.0 4.0\n").unwrap_err();
        assert_eq!(err, TableError::ColumnCount { line: 2, found: 2 });
    }

    #[test]
    fn rejects_extra_column() {
        let err = parse_table("1 2 3 4\n").unwrap_err();
        assert_eq!(err, TableError::ColumnCount { line: 1, found: 4 });
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_table("1.0 2.0 0.5\n1.0 oops 0.5\n").unwrap_err();
        assert_eq!(
            err,
            TableError::InvalidNumber {
                line: 2,
                token: "oops".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_table("").unwrap_err(), TableError::Empty);
        assert_eq!(
            parse_table("# comments only\n\n").unwrap_err(),
            TableError::Empty
        );
    }
}
