use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pvp_cli::render::{DEFAULT_BAR_WIDTH, render_bar_chart, render_shares};
use pvp_report::{
    BAR_CATEGORY_AXIS, BAR_VALUE_AXIS, PriceReport, SortOrder, format_percent, format_price,
};

/// Prints the report table followed by both charts.
pub fn print_report(report: &PriceReport, order: SortOrder) {
    println!("{}", report_table(report, order));
    println!();
    println!("{}", render_bar_chart(report, DEFAULT_BAR_WIDTH));
    println!();
    println!("{}", render_shares(report));
}

/// Prints a numbered option list for one selector.
pub fn print_options(title: &str, options: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell(title)]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, option) in options.iter().enumerate() {
        table.add_row(vec![dim_cell(idx + 1), Cell::new(option)]);
    }
    println!("{table}");
}

fn report_table(report: &PriceReport, order: SortOrder) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(BAR_CATEGORY_AXIS),
        header_cell("Laboratorio"),
        header_cell(BAR_VALUE_AXIS),
        header_cell("Participación"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for row in report.sorted_by_price(order) {
        table.add_row(vec![
            Cell::new(&row.item.name),
            row.item
                .laboratory
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(format_price(row.item.price)),
            row.share
                .map_or_else(|| dim_cell("-"), |share| Cell::new(format_percent(share))),
        ]);
    }

    let stats = report.stats();
    table.add_row(vec![
        total_cell(format!("TOTAL ({})", report.count())),
        dim_cell(format!(
            "min {} / max {} / media {}",
            format_price(stats.min),
            format_price(stats.max),
            format_price(stats.mean)
        )),
        total_cell(format_price(report.total())),
        if report.is_degenerate() {
            dim_cell("-")
        } else {
            total_cell(format_percent(100.0))
        },
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
