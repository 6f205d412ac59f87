//! Raw table reading
//!
//! Turns an input file into rows of cell strings, dispatching on the file
//! extension: `.xlsx`/`.xls` via calamine, `.csv` via the csv crate. Fully
//! blank rows are skipped; everything else is left untouched so that matching
//! downstream stays exact.

use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

use super::LoadError;

/// Read all rows of the first worksheet / the csv body, header row included
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => read_csv_rows(path),
        "xlsx" | "xls" => read_spreadsheet_rows(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, LoadError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn read_spreadsheet_rows(path: &Path) -> Result<Vec<Vec<String>>, LoadError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LoadError::EmptyTable(path.display().to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

    let mut rows = Vec::new();
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(cells);
    }
    Ok(rows)
}

/// Parse a required numeric cell; position is reported 1-based
pub fn parse_number(value: &str, row: usize, column: &str) -> Result<f64, LoadError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}

/// Parse an optional numeric cell: blank means absent, garbage is an error
pub fn parse_optional_number(
    value: &str,
    row: usize,
    column: &str,
) -> Result<Option<f64>, LoadError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_number(value, row, column).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn reads_csv_rows_including_header() {
        let file = csv_file("SOURCE,DESTINATION\nHamburg,Munich\n");
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["SOURCE", "DESTINATION"]);
        assert_eq!(rows[1], vec!["Hamburg", "Munich"]);
    }

    #[test]
    fn skips_fully_blank_rows() {
        let file = csv_file("A,B\n1,2\n,\n3,4\n");
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_rows(Path::new("does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = read_rows(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_number("12.5", 2, "Price").unwrap(), 12.5);
        assert_eq!(parse_number(" 7 ", 2, "Price").unwrap(), 7.0);
        assert!(parse_number("twelve", 2, "Price").is_err());
        assert!(parse_number("", 2, "Price").is_err());

        assert_eq!(parse_optional_number("", 2, "Volume").unwrap(), None);
        assert_eq!(parse_optional_number("3.3", 2, "Volume").unwrap(), Some(3.3));
        assert!(parse_optional_number("x", 2, "Volume").is_err());
    }
}
