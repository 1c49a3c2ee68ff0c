//! CSV reading utilities.

mod header;
mod reader;

pub use header::{ensure_unique_headers, normalize_header};
pub use reader::read_csv_table;
