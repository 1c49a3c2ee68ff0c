//! Loaded source tables and column resolution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use pvp_model::{RawRecord, SourceColumn, any_to_string, any_to_string_non_empty};

use crate::csv::normalize_header;
use crate::error::{IngestError, Result};

/// A source file loaded into a DataFrame, not yet checked for columns.
#[derive(Debug, Clone)]
pub struct SourceTable {
    path: PathBuf,
    df: DataFrame,
}

impl SourceTable {
    pub fn new(path: &Path, df: DataFrame) -> Self {
        Self {
            path: path.to_path_buf(),
            df,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data_frame(&self) -> &DataFrame {
        &self.df
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Header names with surrounding whitespace stripped.
    pub fn headers(&self) -> Vec<String> {
        self.df
            .get_columns()
            .iter()
            .map(|col| normalize_header(col.name()))
            .collect()
    }

    /// Finds the DataFrame column whose normalized header matches `column`.
    pub fn column_name(&self, column: SourceColumn) -> Option<String> {
        self.df
            .get_columns()
            .iter()
            .map(|col| col.name().to_string())
            .find(|name| normalize_header(name) == column.header())
    }

    /// Maps every known column to its DataFrame name.
    ///
    /// Fails with [`IngestError::MissingColumn`] for the first required
    /// column that is absent; the optional laboratory column is simply
    /// left out of the map.
    pub fn resolve_columns(&self) -> Result<BTreeMap<SourceColumn, String>> {
        let mut resolved = BTreeMap::new();
        for column in SourceColumn::REQUIRED {
            let name = self
                .column_name(column)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.header().to_string(),
                    path: self.path.clone(),
                })?;
            resolved.insert(column, name);
        }
        if let Some(name) = self.column_name(SourceColumn::Laboratory) {
            resolved.insert(SourceColumn::Laboratory, name);
        }

        tracing::debug!(
            path = %self.path.display(),
            has_laboratory = resolved.contains_key(&SourceColumn::Laboratory),
            "Resolved source columns"
        );
        Ok(resolved)
    }

    fn column_for(
        &self,
        resolved: &BTreeMap<SourceColumn, String>,
        key: SourceColumn,
    ) -> Result<Option<&Column>> {
        match resolved.get(&key) {
            Some(name) => Ok(Some(self.df.column(name)?)),
            None => Ok(None),
        }
    }

    /// Extracts every data row as a [`RawRecord`].
    pub fn raw_records(&self) -> Result<Vec<RawRecord>> {
        let resolved = self.resolve_columns()?;

        let ingredient_col = self.column_for(&resolved, SourceColumn::ActiveIngredient)?;
        let dose_col = self.column_for(&resolved, SourceColumn::Dose)?;
        let form_col = self.column_for(&resolved, SourceColumn::Form)?;
        let name_col = self.column_for(&resolved, SourceColumn::Name)?;
        let price_col = self.column_for(&resolved, SourceColumn::Price)?;
        let laboratory_col = self.column_for(&resolved, SourceColumn::Laboratory)?;

        let text = |col: Option<&Column>, row_idx: usize| -> Result<String> {
            match col {
                Some(col) => Ok(any_to_string(col.get(row_idx)?)),
                None => Ok(String::new()),
            }
        };

        let mut records = Vec::with_capacity(self.df.height());
        for row_idx in 0..self.df.height() {
            let laboratory = match laboratory_col {
                Some(col) => any_to_string_non_empty(col.get(row_idx)?),
                None => None,
            };
            records.push(RawRecord {
                row: row_idx + 1,
                active_ingredient: text(ingredient_col, row_idx)?,
                dose: text(dose_col, row_idx)?,
                form: text(form_col, row_idx)?,
                name: text(name_col, row_idx)?,
                laboratory,
                price: text(price_col, row_idx)?,
            });
        }

        Ok(records)
    }
}
