//! Price reports for a complete medication selection.
//!
//! [`build_report`] turns the records matching a [`Selection`](pvp_model::Selection)
//! into a [`PriceReport`], or into [`ReportOutcome::NoResults`] when nothing
//! matched. A report whose prices are all zero has no defined shares and is
//! flagged as degenerate instead of dividing by zero.

mod chart;
mod report;

pub use chart::{
    BAR_CATEGORY_AXIS, BAR_VALUE_AXIS, BarPoint, PieSlice, format_percent, format_price,
};
pub use report::{
    PriceReport, PriceStats, ReportItem, ReportOutcome, ReportRow, Shares, SortOrder,
    build_report, report_for,
};
