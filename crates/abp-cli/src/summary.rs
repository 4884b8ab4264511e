use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use abp_cli::ConversionReport;
use abp_model::{
    BUSINESS_CATEGORIES, COLUMN_MAPPINGS, EXCLUDED_CATEGORIES, INSERTED_COLUMNS,
    RESIDENTIAL_CATEGORIES,
};

pub fn print_summary(report: &ConversionReport) {
    println!("Input: {}", report.input.display());
    if report.written {
        println!("Output: {}", report.output.display());
    } else {
        println!("Output: {} (dry run, not written)", report.output.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Excluded categories"),
        removed_cell(report.excluded_rows),
    ]);
    table.add_row(vec![
        Cell::new("Other (dropped)"),
        removed_cell(report.residual_rows),
    ]);
    table.add_row(vec![
        Cell::new("  -> residential").fg(Color::DarkGrey),
        Cell::new(report.categories.residential),
    ]);
    table.add_row(vec![
        Cell::new("  -> business").fg(Color::DarkGrey),
        Cell::new(report.categories.business),
    ]);
    table.add_row(vec![
        Cell::new("OUTPUT")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "{} columns, {} ms",
        report.output_columns.len(),
        report.duration_ms
    );
}

pub fn print_json_summary(report: &ConversionReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_schema() {
    let mut mapping = Table::new();
    mapping.set_header(vec![
        header_cell("#"),
        header_cell("Source"),
        header_cell("Target"),
    ]);
    apply_table_style(&mut mapping);
    align_column(&mut mapping, 0, CellAlignment::Right);
    for (idx, column) in COLUMN_MAPPINGS.iter().enumerate() {
        mapping.add_row(vec![
            dim_cell(idx),
            Cell::new(column.source),
            Cell::new(column.target),
        ]);
    }
    println!("Column mapping:");
    println!("{mapping}");

    let mut inserted = Table::new();
    inserted.set_header(vec![
        header_cell("Position"),
        header_cell("Column"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut inserted);
    align_column(&mut inserted, 0, CellAlignment::Right);
    for column in &INSERTED_COLUMNS {
        let value = if column.value.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(column.value)
        };
        inserted.add_row(vec![Cell::new(column.position), Cell::new(column.name), value]);
    }
    println!();
    println!("Inserted columns:");
    println!("{inserted}");

    let mut categories = Table::new();
    categories.set_header(vec![header_cell("Rule"), header_cell("Detailed categories")]);
    apply_table_style(&mut categories);
    categories.add_row(vec![
        Cell::new("excluded").fg(Color::Red),
        Cell::new(EXCLUDED_CATEGORIES.join(", ")),
    ]);
    categories.add_row(vec![
        Cell::new("residential").fg(Color::Green),
        Cell::new(RESIDENTIAL_CATEGORIES.join(", ")),
    ]);
    categories.add_row(vec![
        Cell::new("business").fg(Color::Blue),
        Cell::new(BUSINESS_CATEGORIES.join(", ")),
    ]);
    println!();
    println!("Categories:");
    println!("{categories}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn removed_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
