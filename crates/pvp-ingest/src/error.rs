//! Error types for price source ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a price source.
///
/// Everything except [`IngestError::MissingColumn`] means the file itself
/// could not be loaded; see [`IngestError::is_file_load`].
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File extension is not a known spreadsheet format.
    #[error("unsupported source format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Requested worksheet does not exist.
    #[error("sheet '{sheet}' not found in {path} (available: {})", .available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    /// Source has no header row.
    #[error("source is empty: {path}")]
    EmptySource { path: PathBuf },

    // === Schema Errors ===
    /// Required column not found after header normalization.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Two headers are the same once normalized.
    #[error("duplicate column '{column}' in {path}")]
    DuplicateColumn { column: String, path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Returns true if the error means the source file could not be loaded
    /// at all (missing, unreadable or malformed).
    pub fn is_file_load(&self) -> bool {
        !matches!(self, Self::MissingColumn { .. })
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("pagina.xlsx"),
        };
        assert_eq!(err.to_string(), "source file not found: pagina.xlsx");
    }

    #[test]
    fn test_missing_column_display() {
        let err = IngestError::MissingColumn {
            column: "PVP".to_string(),
            path: PathBuf::from("precios.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'PVP' not found in precios.csv"
        );
        assert!(!err.is_file_load());
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = IngestError::SheetNotFound {
            path: PathBuf::from("pagina.xlsx"),
            sheet: "Precios".to_string(),
            available: vec!["Hoja1".to_string(), "Hoja2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "sheet 'Precios' not found in pagina.xlsx (available: Hoja1, Hoja2)"
        );
        assert!(err.is_file_load());
    }

    #[test]
    fn test_duplicate_column_display() {
        let err = IngestError::DuplicateColumn {
            column: "PVP".to_string(),
            path: PathBuf::from("pagina.xlsx"),
        };
        assert_eq!(err.to_string(), "duplicate column 'PVP' in pagina.xlsx");
        assert!(err.is_file_load());
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("PVP".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
