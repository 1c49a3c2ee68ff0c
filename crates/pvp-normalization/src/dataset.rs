//! Raw row normalization into canonical records.

use std::fmt;

use pvp_model::{MedicationRecord, RawRecord};
use serde::Serialize;

use crate::keys::{normalize_dose, normalize_form, normalize_ingredient};
use crate::price::parse_price;

/// Why a source row was left out of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SkipReason {
    /// The PVP cell is empty or not a number.
    UnparsablePrice(String),
    /// The PVP cell parsed to a negative value.
    NegativePrice(f64),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparsablePrice(raw) => write!(f, "unparsable price '{raw}'"),
            Self::NegativePrice(value) => write!(f, "negative price {value}"),
        }
    }
}

/// A dropped source row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    /// 1-based data row number in the source.
    pub row: usize,
    pub reason: SkipReason,
}

/// Result of normalizing a source: canonical records plus the rows that
/// were dropped for bad prices.
#[derive(Debug, Clone, Default)]
pub struct NormalizedDataset {
    pub records: Vec<MedicationRecord>,
    pub skipped: Vec<SkippedRow>,
    /// Rows with no content at all (trailing spreadsheet lines).
    pub blank_rows: usize,
}

impl NormalizedDataset {
    /// Number of rows dropped for an unusable price.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

fn is_blank(row: &RawRecord) -> bool {
    [
        &row.active_ingredient,
        &row.dose,
        &row.form,
        &row.name,
        &row.price,
    ]
    .iter()
    .all(|value| value.trim().is_empty())
}

/// Normalizes one raw row.
///
/// Returns the reason the row must be skipped when its price is unusable.
pub fn normalize_row(row: &RawRecord) -> Result<MedicationRecord, SkipReason> {
    let price = parse_price(&row.price).ok_or_else(|| SkipReason::UnparsablePrice(row.price.clone()))?;
    if price < 0.0 {
        return Err(SkipReason::NegativePrice(price));
    }

    Ok(MedicationRecord {
        active_ingredient: normalize_ingredient(&row.active_ingredient),
        dose: normalize_dose(&row.dose),
        form: normalize_form(&row.form),
        name: row.name.trim().to_string(),
        laboratory: row
            .laboratory
            .as_deref()
            .map(str::trim)
            .filter(|lab| !lab.is_empty())
            .map(str::to_string),
        price,
    })
}

/// Normalizes every raw row of a source.
///
/// Rows with an unusable price are dropped and reported in
/// [`NormalizedDataset::skipped`]; fully blank rows are dropped silently.
/// Input order is preserved.
pub fn normalize_rows(rows: &[RawRecord]) -> NormalizedDataset {
    let mut dataset = NormalizedDataset {
        records: Vec::with_capacity(rows.len()),
        ..NormalizedDataset::default()
    };

    for row in rows {
        if is_blank(row) {
            dataset.blank_rows += 1;
            continue;
        }
        match normalize_row(row) {
            Ok(record) => dataset.records.push(record),
            Err(reason) => {
                tracing::debug!(row = row.row, reason = %reason, "Skipping source row");
                dataset.skipped.push(SkippedRow {
                    row: row.row,
                    reason,
                });
            }
        }
    }

    if !dataset.skipped.is_empty() {
        tracing::warn!(
            skipped = dataset.skipped.len(),
            kept = dataset.records.len(),
            "Dropped rows with unusable PVP values"
        );
    }
    tracing::debug!(
        records = dataset.records.len(),
        blank_rows = dataset.blank_rows,
        "Normalized source rows"
    );

    dataset
}
