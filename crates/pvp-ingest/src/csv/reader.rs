//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::header::ensure_unique_headers;

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
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
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported. A file with no
/// bytes at all is an empty source.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable; normalize_header strips it
    Ok(())
}

/// Reads a CSV file into a Polars DataFrame with every column as text.
///
/// Schema inference is disabled so that dose strings such as `"500"` and
/// price cells such as `"12,50"` reach the normalizer untouched.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    ensure_unique_headers(path, df.get_column_names().into_iter().map(PlSmallStr::as_str))?;

    tracing::debug!(
        path = %path.display(),
        columns = df.width(),
        rows = df.height(),
        "Read CSV source"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::normalize_header;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptySource { .. })));
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}DOSIS,PVP\n1mg,2\n");
        let df = read_csv_table(file.path()).unwrap();
        let headers: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|name| normalize_header(name.as_str()))
            .collect();
        assert_eq!(headers, vec!["DOSIS", "PVP"]);
    }

    #[test]
    fn test_read_csv_table_rejects_padded_duplicates() {
        let file = create_temp_csv("PVP,DOSIS, PVP\n1,1mg,2\n");
        let result = read_csv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::DuplicateColumn { ref column, .. }) if column == "PVP"
        ));
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, 0x41, 0x00]).unwrap();
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_table_keeps_text() {
        let file = create_temp_csv("DOSIS,PVP\n500,\"12,50\"\n400mg,3\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        let pvp = df.column("PVP").unwrap();
        assert_eq!(pvp.dtype(), &DataType::String);
    }

    #[test]
    fn test_read_csv_table_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/precios.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
