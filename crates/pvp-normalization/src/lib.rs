//! Normalization of medication price rows.
//!
//! Raw spreadsheet rows are turned into canonical
//! [`MedicationRecord`](pvp_model::MedicationRecord)s before any filtering:
//!
//! - [`normalize_ingredient`], [`normalize_dose`], [`normalize_form`]:
//!   idempotent key canonicalization
//! - [`parse_price`]: lenient PVP parsing
//! - [`normalize_rows`]: whole-source normalization with skipped-row accounting

mod dataset;
mod keys;
mod price;

pub use dataset::{NormalizedDataset, SkipReason, SkippedRow, normalize_row, normalize_rows};
pub use keys::{normalize_dose, normalize_form, normalize_ingredient, normalize_record};
pub use price::parse_price;
