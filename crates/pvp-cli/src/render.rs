//! Plain-text charts for terminal output.

use pvp_report::{PriceReport, format_percent};

/// Width of the longest bar, in characters.
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|label| label.chars().count()).max().unwrap_or(0)
}

/// Horizontal bar chart of the report prices, in report order.
///
/// The longest bar is `width` characters; each bar is annotated with its
/// price.
pub fn render_bar_chart(report: &PriceReport, width: usize) -> String {
    let bars = report.bar_series();
    let pad = label_width(bars.iter().map(|bar| bar.label.as_str()));
    let max = bars.iter().map(|bar| bar.value).fold(0.0_f64, f64::max);

    let mut lines = vec![report.bar_title()];
    for bar in &bars {
        let length = if max > 0.0 {
            (bar.value / max * width as f64).round() as usize
        } else {
            0
        };
        let body: String = std::iter::repeat_n(BAR_CHAR, length).collect();
        lines.push(format!(
            "{:<pad$} {body} {}",
            bar.label,
            bar.value_label()
        ));
    }
    lines.join("\n")
}

/// Share of each product in the summed price.
///
/// A report whose prices are all zero has no shares; a notice replaces
/// the slices.
pub fn render_shares(report: &PriceReport) -> String {
    let mut lines = vec![report.pie_title()];
    match report.pie_slices() {
        Some(slices) => {
            let pad = label_width(slices.iter().map(|slice| slice.label.as_str()));
            for slice in &slices {
                lines.push(format!(
                    "{:<pad$} {:>6}",
                    slice.label,
                    format_percent(slice.percent)
                ));
            }
        }
        None => lines.push("Todos los PVP son 0; no hay distribución que mostrar.".to_string()),
    }
    lines.join("\n")
}
