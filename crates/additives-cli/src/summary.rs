use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use additives_cli::pipeline::{ComparisonSummary, EuSummary};
use additives_output::WriteOutcome;

pub fn print_eu_summary(summary: &EuSummary) {
    println!("EU restriction records: {}", summary.records);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Rows"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(outcome_row("Banned additives", &summary.banned));
    table.add_row(outcome_row("High-risk additives", &summary.high_risk));
    println!("{table}");
}

pub fn print_comparison_summary(summary: &ComparisonSummary) {
    println!("US substance records: {}", summary.us_substances);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Substances")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Banned in both US and EU"),
        count_cell(summary.banned_in_both, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Banned in EU only"),
        count_cell(summary.banned_in_eu_only, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("High risk in EU"),
        count_cell(summary.high_risk_in_eu, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("Unmatched EU banned"),
        dim_cell(summary.unmatched_banned),
    ]);
    table.add_row(vec![
        dim_cell("Unmatched EU high-risk"),
        dim_cell(summary.unmatched_high_risk),
    ]);
    let total = summary.banned_in_both + summary.banned_in_eu_only + summary.high_risk_in_eu;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("Output: {}", summary.output.path().display());
}

fn outcome_row(label: &str, outcome: &WriteOutcome) -> Vec<Cell> {
    match outcome {
        WriteOutcome::Written { path, rows } => vec![
            Cell::new(label),
            Cell::new(rows),
            Cell::new(path.display()),
        ],
        WriteOutcome::Skipped { .. } => vec![
            Cell::new(label),
            dim_cell(0),
            dim_cell("skipped (empty)"),
        ],
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
