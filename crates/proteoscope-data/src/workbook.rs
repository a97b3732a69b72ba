//! Raw xlsx access: open a workbook, pull one sheet as headers + data rows.
//!
//! The supplement puts two title rows above the real header, so callers pass
//! the zero-based header row index and everything above it is discarded.

use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::path::Path;

use proteoscope_common::error::{ProteoscopeError, Result};

/// One worksheet reduced to a header row and its data rows.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

impl Sheet {
    /// Index of an exactly named column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a required column, as a load error when absent.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ProteoscopeError::ColumnNotFound(name.to_string()))
    }
}

/// Load one sheet by exact name, treating `header_row` (zero-based) as the
/// header and all rows after it as data.
pub fn load_sheet(path: &Path, sheet_name: &str, header_row: usize) -> Result<Sheet> {
    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: XlsxError| ProteoscopeError::Spreadsheet(e.to_string()))?;

    let range = workbook.worksheet_range(sheet_name).map_err(|e| match e {
        XlsxError::WorksheetNotFound(name) => ProteoscopeError::SheetNotFound(name),
        other => ProteoscopeError::Spreadsheet(other.to_string()),
    })?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .nth(header_row)
        .ok_or_else(|| {
            ProteoscopeError::Spreadsheet(format!(
                "sheet '{}' has no header row at index {}",
                sheet_name, header_row
            ))
        })?
        .iter()
        .map(cell_to_string)
        .collect();

    let data: Vec<Vec<Data>> = rows.map(|r| r.to_vec()).collect();

    Ok(Sheet { headers, rows: data })
}

/// Text content of a cell; numbers render via Display, blanks as "".
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Numeric content of a cell. Excel stores most numbers as floats; numeric
/// strings are tolerated, everything else is `None`.
pub fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Integer content of a cell (Entrez ids arrive as floats from Excel).
pub fn cell_to_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) => Some(*f as i64),
        Data::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
