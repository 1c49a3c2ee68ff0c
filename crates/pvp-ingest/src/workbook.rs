//! Workbook (XLSX, XLS, XLSB, ODS) reading via calamine.
//!
//! The selected worksheet is converted into a DataFrame of text columns so
//! that CSV and workbook sources share the same downstream path.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::*;

use crate::csv::{ensure_unique_headers, normalize_header};
use crate::error::{IngestError, Result};

/// Converts a calamine cell to text.
///
/// Integral floats lose their fractional part (`3.0` becomes `"3"`), the way
/// spreadsheet tools display them.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Reads one worksheet into a DataFrame of text columns.
///
/// The first row is the header row. When `sheet` is `None` the first
/// worksheet of the workbook is used.
pub fn read_workbook_table(path: &Path, sheet: Option<&str>) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: wanted.to_string(),
                available: names.clone(),
            })?,
        None => names.first().cloned().ok_or_else(|| IngestError::EmptySource {
            path: path.to_path_buf(),
        })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    };

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = normalize_header(&cell_to_string(cell));
            if name.is_empty() {
                format!("column_{}", idx + 1)
            } else {
                name
            }
        })
        .collect();

    if header_row.iter().all(|cell| cell_to_string(cell).trim().is_empty()) {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    ensure_unique_headers(path, headers.iter().map(String::as_str))?;

    let mut values: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, column_values) in values.iter_mut().enumerate() {
            let text = row.get(idx).map(cell_to_string).unwrap_or_default();
            column_values.push(text);
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(values)
        .map(|(name, column_values)| Series::new(name.as_str().into(), column_values).into_column())
        .collect();
    let df = DataFrame::new(columns)?;

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        columns = df.width(),
        rows = df.height(),
        "Read workbook source"
    );

    Ok(df)
}
