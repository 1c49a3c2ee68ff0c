//! Source format detection and loading.

use std::path::Path;

use pvp_model::LoadOptions;

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::table::SourceTable;
use crate::workbook::read_workbook_table;

/// Spreadsheet formats the explorer can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma separated values, read with Polars.
    Csv,
    /// XLSX / XLS / XLSB / ODS workbook, read with calamine.
    Workbook,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Check file size against a limit before loading.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Loads a price source into a [`SourceTable`].
///
/// Fails with a file-load error when the file is missing, too large,
/// unreadable or malformed. Column presence is checked later by
/// [`SourceTable::raw_records`].
pub fn load_source(path: &Path, options: &LoadOptions) -> Result<SourceTable> {
    let format = SourceFormat::from_path(path)?;
    check_file_size(path, options.max_file_size)?;

    let df = match format {
        SourceFormat::Csv => read_csv_table(path)?,
        SourceFormat::Workbook => read_workbook_table(path, options.sheet.as_deref())?,
    };

    tracing::info!(
        path = %path.display(),
        format = ?format,
        rows = df.height(),
        "Loaded price source"
    );

    Ok(SourceTable::new(path, df))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("pagina.xlsx")).unwrap(),
            SourceFormat::Workbook
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("PRECIOS.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert!(matches!(
            SourceFormat::from_path(Path::new("precios.txt")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_check_file_size_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();

        assert!(check_file_size(file.path(), 10).is_ok());
        assert!(matches!(
            check_file_size(file.path(), 5),
            Err(IngestError::FileTooLarge { size: 10, .. })
        ));
    }

    #[test]
    fn test_load_source_missing_file() {
        let result = load_source(Path::new("/nonexistent/pagina.xlsx"), &LoadOptions::default());
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
