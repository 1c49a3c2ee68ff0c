//! Spreadsheet columns understood by the explorer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A column of the medication price spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceColumn {
    /// `PRINCIPIO ACTIVO`
    ActiveIngredient,
    /// `FORMA FARMACEUTICA`
    Form,
    /// `DOSIS`
    Dose,
    /// `NOMBRE MEDICAMENTO`
    Name,
    /// `PVP`
    Price,
    /// `LABORATORIO` (optional, display only)
    Laboratory,
}

impl SourceColumn {
    /// Columns that must be present in every source file.
    pub const REQUIRED: [SourceColumn; 5] = [
        SourceColumn::ActiveIngredient,
        SourceColumn::Form,
        SourceColumn::Dose,
        SourceColumn::Name,
        SourceColumn::Price,
    ];

    /// Header text of the column after whitespace stripping.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::ActiveIngredient => "PRINCIPIO ACTIVO",
            Self::Form => "FORMA FARMACEUTICA",
            Self::Dose => "DOSIS",
            Self::Name => "NOMBRE MEDICAMENTO",
            Self::Price => "PVP",
            Self::Laboratory => "LABORATORIO",
        }
    }

    /// Whether a source file must provide this column.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Laboratory)
    }
}

impl fmt::Display for SourceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_columns_exclude_laboratory() {
        assert!(SourceColumn::REQUIRED.iter().all(|c| c.is_required()));
        assert!(!SourceColumn::Laboratory.is_required());
    }

    #[test]
    fn display_uses_header_text() {
        assert_eq!(SourceColumn::Form.to_string(), "FORMA FARMACEUTICA");
        assert_eq!(SourceColumn::Price.to_string(), "PVP");
    }
}
