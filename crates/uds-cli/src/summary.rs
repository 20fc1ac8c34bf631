use std::path::{Path, PathBuf};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use uds_cli::pipeline::ExtractionResult;
use uds_model::{AvailabilityRow, Catalog};

/// Availability rows shown in the console table.
const TOP_COLUMNS: usize = 15;

pub fn print_summary(result: &ExtractionResult) {
    println!(
        "Dataset: {} rows, {} columns ({} kept from catalog of {})",
        result.dataset_rows,
        result.dataset_columns,
        result.kept_columns,
        result.catalog.len()
    );
    println!(
        "Rows: {} total, {} completely empty, {} with some data",
        result.stats.total_rows, result.stats.empty_rows, result.stats.rows_with_data
    );

    let mut files = Table::new();
    files.set_header(vec![header_cell("Output"), header_cell("Path")]);
    apply_table_style(&mut files);
    let outputs = &result.outputs;
    for (label, path) in [
        ("Variable catalog", &outputs.catalog),
        ("Cleaned subset", &outputs.cleaned),
        ("Availability summary", &outputs.summary),
        ("Row statistics", &outputs.stats),
        ("Heatmap", &outputs.heatmap),
    ] {
        files.add_row(vec![Cell::new(label), path_cell(path.as_ref())]);
    }
    println!("{files}");

    if result.summary.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Valid"),
        header_cell("Percent"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in result.summary.iter().take(TOP_COLUMNS) {
        table.add_row(availability_cells(row));
    }
    let hidden = result.summary.len().saturating_sub(TOP_COLUMNS);
    if hidden > 0 {
        table.add_row(vec![
            dim_cell(format!("... {hidden} more")),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");
}

pub fn print_catalog(catalog: &Catalog, path: &Path) {
    println!("Catalog: {} variables", catalog.len());
    println!("Written: {}", path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Form"),
        header_cell("Variable"),
        header_cell("Label"),
        header_cell("Page"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for entry in catalog {
        table.add_row(vec![
            Cell::new(&entry.form_field),
            Cell::new(&entry.variable_name).add_attribute(Attribute::Bold),
            Cell::new(&entry.label),
            Cell::new(entry.source_page),
        ]);
    }
    println!("{table}");
}

fn availability_cells(row: &AvailabilityRow) -> Vec<Cell> {
    let color = if row.valid_percentage >= 50.0 {
        Color::Green
    } else if row.valid_percentage > 0.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    vec![
        Cell::new(&row.column_name),
        Cell::new(row.valid_count),
        Cell::new(format!("{:.1}%", row.valid_percentage)).fg(color),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
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

fn path_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
