//! Data model types for medication price exploration.
//!
//! This crate holds the types shared by every stage of the explorer:
//!
//! - [`record`]: [`RawRecord`] as read from a source file, the canonical
//!   [`MedicationRecord`], and the [`Selection`] triple chosen by a user
//! - [`columns`]: the spreadsheet headers the explorer understands
//! - [`options`]: source loading options
//! - [`cell`]: Polars `AnyValue` conversion helpers

pub mod cell;
pub mod columns;
pub mod options;
pub mod record;

pub use cell::{any_to_string, any_to_string_non_empty};
pub use columns::SourceColumn;
pub use options::{DEFAULT_MAX_FILE_SIZE, LoadOptions};
pub use record::{MedicationRecord, RawRecord, Selection};
