//! Header normalization and uniqueness checks.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Normalizes a header value by stripping a UTF-8 BOM and surrounding
/// whitespace.
///
/// Spreadsheet exports often carry padded headers such as `" PVP "`; the
/// explorer matches columns on the trimmed text.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Fails when two headers are equal once normalized.
///
/// `" PVP"` and `"PVP "` would otherwise both claim the price column.
pub fn ensure_unique_headers<'a>(
    path: &Path,
    headers: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = BTreeSet::new();
    for header in headers {
        let name = normalize_header(header);
        if !seen.insert(name.clone()) {
            return Err(IngestError::DuplicateColumn {
                column: name,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  PVP  "), "PVP");
        assert_eq!(normalize_header("PRINCIPIO ACTIVO"), "PRINCIPIO ACTIVO");
        assert_eq!(normalize_header("\u{feff}DOSIS"), "DOSIS");
    }

    #[test]
    fn test_unique_headers_pass() {
        let path = Path::new("precios.csv");
        assert!(ensure_unique_headers(path, ["DOSIS", "PVP", "NOMBRE MEDICAMENTO"]).is_ok());
    }

    #[test]
    fn test_headers_equal_after_trim_are_duplicates() {
        let path = Path::new("precios.csv");
        let err = ensure_unique_headers(path, ["PVP", "DOSIS", "PVP "]).unwrap_err();
        assert!(matches!(
            &err,
            IngestError::DuplicateColumn { column, .. } if column == "PVP"
        ));
        assert!(err.is_file_load());
    }
}
