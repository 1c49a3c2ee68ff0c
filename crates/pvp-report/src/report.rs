//! Price report construction.

use pvp_model::{MedicationRecord, Selection};
use pvp_query::Catalog;
use serde::Serialize;

/// One product of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laboratory: Option<String>,
    pub price: f64,
}

impl From<&MedicationRecord> for ReportItem {
    fn from(record: &MedicationRecord) -> Self {
        Self {
            name: record.name.clone(),
            laboratory: record.laboratory.clone(),
            price: record.price,
        }
    }
}

/// Percentage share of each item in the summed price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shares {
    /// `price_i / total * 100`, aligned with the report items.
    Distributed(Vec<f64>),
    /// Every price is zero, so shares are undefined.
    Degenerate,
}

/// Order used by [`PriceReport::sorted_by_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep source order.
    #[default]
    Source,
    Ascending,
    Descending,
}

/// Minimum, maximum and mean price of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// A report item paired with its share, if shares are defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow<'a> {
    pub item: &'a ReportItem,
    pub share: Option<f64>,
}

/// Prices of the products matching a selection.
///
/// Never empty: an empty match is reported as [`ReportOutcome::NoResults`].
/// Items keep the order of the source rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    selection: Selection,
    items: Vec<ReportItem>,
    total: f64,
    shares: Shares,
}

impl PriceReport {
    fn from_matching(selection: Selection, matching: &[MedicationRecord]) -> Self {
        let items: Vec<ReportItem> = matching.iter().map(ReportItem::from).collect();
        let total: f64 = items.iter().map(|item| item.price).sum();
        let shares = if total == 0.0 {
            Shares::Degenerate
        } else {
            Shares::Distributed(items.iter().map(|item| item.price / total * 100.0).collect())
        };
        Self {
            selection,
            items,
            total,
            shares,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn items(&self) -> &[ReportItem] {
        &self.items
    }

    /// Number of products.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all prices.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn shares(&self) -> &Shares {
        &self.shares
    }

    /// True when every price is zero.
    pub fn is_degenerate(&self) -> bool {
        matches!(self.shares, Shares::Degenerate)
    }

    /// Percentage share of the item at `index`.
    ///
    /// `None` when the index is out of range or the report is degenerate.
    pub fn share_of(&self, index: usize) -> Option<f64> {
        match &self.shares {
            Shares::Distributed(values) => values.get(index).copied(),
            Shares::Degenerate => None,
        }
    }

    pub fn stats(&self) -> PriceStats {
        let min = self
            .items
            .iter()
            .map(|item| item.price)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .items
            .iter()
            .map(|item| item.price)
            .fold(f64::NEG_INFINITY, f64::max);
        PriceStats {
            min,
            max,
            mean: self.total / self.items.len() as f64,
        }
    }

    /// Items with their shares in source order.
    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| ReportRow {
                item,
                share: self.share_of(idx),
            })
            .collect()
    }

    /// Items with their shares, optionally sorted by price.
    ///
    /// The sort is stable, so equal prices keep source order. The report
    /// itself is left untouched.
    pub fn sorted_by_price(&self, order: SortOrder) -> Vec<ReportRow<'_>> {
        let mut rows = self.rows();
        match order {
            SortOrder::Source => {}
            SortOrder::Ascending => {
                rows.sort_by(|a, b| a.item.price.total_cmp(&b.item.price));
            }
            SortOrder::Descending => {
                rows.sort_by(|a, b| b.item.price.total_cmp(&a.item.price));
            }
        }
        rows
    }
}

/// Result of building a report for a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// At least one product matched.
    Report(PriceReport),
    /// The selection matched no product.
    NoResults(Selection),
}

impl ReportOutcome {
    pub fn report(&self) -> Option<&PriceReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::NoResults(_) => None,
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults(_))
    }
}

/// Builds the report for the records matching `selection`.
///
/// `matching` is the subset already filtered by the selection, in source
/// order.
pub fn build_report(matching: &[MedicationRecord], selection: &Selection) -> ReportOutcome {
    if matching.is_empty() {
        tracing::info!(selection = %selection, "No products match the selection");
        return ReportOutcome::NoResults(selection.clone());
    }

    let report = PriceReport::from_matching(selection.clone(), matching);
    if report.is_degenerate() {
        tracing::warn!(
            selection = %selection,
            count = report.count(),
            "All prices are zero; shares are undefined"
        );
    }
    tracing::debug!(
        selection = %selection,
        count = report.count(),
        total = report.total(),
        "Built price report"
    );
    ReportOutcome::Report(report)
}

/// Filters `catalog` by `selection` and builds the report.
pub fn report_for(catalog: &Catalog, selection: &Selection) -> ReportOutcome {
    build_report(&catalog.select(selection), selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64) -> MedicationRecord {
        MedicationRecord {
            active_ingredient: "IBUPROFENO".to_string(),
            dose: "400mg".to_string(),
            form: "TABLETA".to_string(),
            name: name.to_string(),
            laboratory: None,
            price,
        }
    }

    fn selection() -> Selection {
        Selection::new("IBUPROFENO", "400mg", "TABLETA")
    }

    fn report(prices: &[(&str, f64)]) -> PriceReport {
        let records: Vec<MedicationRecord> =
            prices.iter().map(|(name, price)| record(name, *price)).collect();
        match build_report(&records, &selection()) {
            ReportOutcome::Report(report) => report,
            ReportOutcome::NoResults(_) => panic!("expected a report"),
        }
    }

    #[test]
    fn empty_subset_is_no_results() {
        let outcome = build_report(&[], &selection());
        assert_eq!(outcome, ReportOutcome::NoResults(selection()));
        assert!(outcome.report().is_none());
    }

    #[test]
    fn shares_follow_prices() {
        let report = report(&[("A", 30.0), ("B", 10.0)]);
        assert_eq!(report.count(), 2);
        assert_eq!(report.total(), 40.0);
        assert_eq!(report.share_of(0), Some(75.0));
        assert_eq!(report.share_of(1), Some(25.0));
        assert_eq!(report.share_of(2), None);
    }

    #[test]
    fn single_nonzero_price_is_not_degenerate() {
        let report = report(&[("A", 10.0), ("B", 0.0), ("C", 0.0)]);
        assert!(!report.is_degenerate());
        assert_eq!(report.shares(), &Shares::Distributed(vec![100.0, 0.0, 0.0]));
    }

    #[test]
    fn all_zero_prices_are_degenerate() {
        let report = report(&[("A", 0.0), ("B", 0.0)]);
        assert!(report.is_degenerate());
        assert_eq!(report.share_of(0), None);
        assert_eq!(report.items()[1].price, 0.0);
    }

    #[test]
    fn items_keep_source_order() {
        let report = report(&[("Caro", 9.0), ("Barato", 1.0), ("Medio", 5.0)]);
        let names: Vec<&str> = report.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Caro", "Barato", "Medio"]);
    }

    #[test]
    fn sorting_does_not_reorder_report() {
        let report = report(&[("Caro", 9.0), ("Barato", 1.0), ("Medio", 5.0), ("Otro", 5.0)]);
        let ascending: Vec<&str> = report
            .sorted_by_price(SortOrder::Ascending)
            .iter()
            .map(|row| row.item.name.as_str())
            .collect();
        assert_eq!(ascending, vec!["Barato", "Medio", "Otro", "Caro"]);
        let descending: Vec<&str> = report
            .sorted_by_price(SortOrder::Descending)
            .iter()
            .map(|row| row.item.name.as_str())
            .collect();
        assert_eq!(descending, vec!["Caro", "Medio", "Otro", "Barato"]);
        assert_eq!(report.items()[0].name, "Caro");
    }

    #[test]
    fn stats_summarize_prices() {
        let stats = report(&[("A", 2.0), ("B", 4.0), ("C", 9.0)]).stats();
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.mean, 5.0);
    }

    #[test]
    fn report_for_filters_catalog() {
        let mut other = record("Otro", 3.0);
        other.form = "CAPSULA".to_string();
        let catalog = Catalog::new(vec![record("A", 1.0), other]);
        let outcome = report_for(&catalog, &selection());
        assert_eq!(outcome.report().map(PriceReport::count), Some(1));

        let missing = Selection::new("IBUPROFENO", "400mg", "JARABE");
        assert!(report_for(&catalog, &missing).is_no_results());
    }
}
