use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_cli::types::SyncResult;

pub fn print_summary(result: &SyncResult) {
    println!("Catalog: {}", result.catalog.display());
    if result.dry_run {
        println!("Dry run: no files written, nothing submitted");
    } else {
        println!("Batches: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Batch"),
        header_cell("Products"),
        header_cell("File"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut total_products = 0usize;
    for batch in &result.batches {
        total_products += batch.products;
        let file = batch
            .file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(batch.sequence),
            Cell::new(batch.products),
            Cell::new(file),
            status_cell(batch),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_products).add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows in", result.rows)),
        Cell::new(if result.submitted {
            "submitted"
        } else {
            "not submitted"
        }),
    ]);
    println!("{table}");
}

fn status_cell(batch: &catalog_cli::types::BatchSummary) -> Cell {
    match &batch.status {
        None => Cell::new("-").fg(Color::DarkGrey),
        Some(status) if status.is_accepted() => Cell::new("accepted").fg(Color::Green),
        Some(status) => Cell::new(status.to_string()).fg(Color::Red),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
