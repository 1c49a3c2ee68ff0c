//! Medication price source ingestion.
//!
//! This crate loads the price spreadsheet into a Polars DataFrame and turns
//! its rows into [`RawRecord`](pvp_model::RawRecord)s for normalization.
//!
//! # Features
//!
//! - **CSV Loading**: UTF-8 CSV read with Polars, every column kept as text
//! - **Workbook Loading**: XLSX/XLS/XLSB/ODS read with calamine
//! - **Header Normalization**: column headers are matched after trimming
//! - **Column Resolution**: required columns are checked before any row is read
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pvp_ingest::load_source;
//! use pvp_model::LoadOptions;
//!
//! let table = load_source(Path::new("pagina.xlsx"), &LoadOptions::default())?;
//! let rows = table.raw_records()?;
//! ```

mod csv;
mod error;
mod source;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Loading ===
pub use source::{SourceFormat, check_file_size, load_source};
pub use table::SourceTable;

// === Format Readers ===
pub use csv::{normalize_header, read_csv_table};
pub use workbook::{cell_to_string, read_workbook_table};
