//! Chart-ready views of a [`PriceReport`].
//!
//! The bar chart compares prices per product, the pie chart shows each
//! product's share of the summed price. Rendering is left to the front end.

use serde::Serialize;

use crate::report::PriceReport;

/// Axis label of the bar chart's category axis.
pub const BAR_CATEGORY_AXIS: &str = "Marca / Medicamento";
/// Axis label of the bar chart's value axis.
pub const BAR_VALUE_AXIS: &str = "Precio PVP";

/// One bar: the product name on the category axis and its price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
}

impl BarPoint {
    /// Annotation drawn above the bar.
    pub fn value_label(&self) -> String {
        format_price(self.value)
    }
}

/// One pie slice with its percentage of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub percent: f64,
}

impl PieSlice {
    pub fn percent_label(&self) -> String {
        format_percent(self.percent)
    }
}

/// Price with two decimals, as annotated on the bars.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

/// Share with one decimal and a percent sign.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

impl PriceReport {
    /// Title of the bar chart.
    pub fn bar_title(&self) -> String {
        format!(
            "Comparación de PVP - {} ({} resultados)",
            self.selection(),
            self.count()
        )
    }

    /// Title of the pie chart.
    pub fn pie_title(&self) -> String {
        format!("Distribución de PVP - {}", self.selection())
    }

    /// One bar per item, in report order.
    pub fn bar_series(&self) -> Vec<BarPoint> {
        self.items()
            .iter()
            .map(|item| BarPoint {
                label: item.name.clone(),
                value: item.price,
            })
            .collect()
    }

    /// One slice per item, or `None` when every price is zero.
    pub fn pie_slices(&self) -> Option<Vec<PieSlice>> {
        if self.is_degenerate() {
            return None;
        }
        Some(
            self.rows()
                .into_iter()
                .map(|row| PieSlice {
                    label: row.item.name.clone(),
                    percent: row.share.unwrap_or(0.0),
                })
                .collect(),
        )
    }
}
