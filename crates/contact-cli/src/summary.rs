use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contact_cli::config::RunConfig;
use contact_cli::pipeline::{RunOutput, RunSummary};
use contact_model::AccuracyLabel;

pub fn print_summary(config: &RunConfig, output: &RunOutput) {
    let summary = &output.summary;
    println!("Input: {}", config.input.display());
    if summary.persisted {
        let sink = config.sink();
        println!("Duplicates: {}", sink.duplicates_path().display());
        println!("Matches: {}", sink.matches_path().display());
    } else {
        println!("Dry run: no files written");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Contacts"), Cell::new(summary.contacts)]);
    table.add_row(vec![
        Cell::new("Pairs evaluated"),
        Cell::new(summary.pairs_evaluated),
    ]);
    if summary.self_pairs_skipped > 0 {
        table.add_row(vec![
            Cell::new("Pairs sharing an ID (skipped)"),
            count_cell(summary.self_pairs_skipped, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Duplicate pairs"),
        count_cell(summary.duplicate_pairs, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Related pairs"),
        count_cell(summary.related_pairs, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Match rows").add_attribute(Attribute::Bold),
        Cell::new(summary.match_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_accuracy_table(summary);
    println!(
        "Timing: ingest {} ms, match {} ms, output {} ms",
        summary.ingest_ms, summary.match_ms, summary.output_ms
    );
}

fn print_accuracy_table(summary: &RunSummary) {
    if summary.match_rows == 0 {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Accuracy"),
        header_cell("Match rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for label in AccuracyLabel::ALL.iter().rev() {
        let count = summary.label_counts.get(label).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(label.level()),
            accuracy_cell(*label),
            count_cell(count, Color::Reset),
        ]);
    }
    println!();
    println!("Accuracy:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn accuracy_cell(label: AccuracyLabel) -> Cell {
    let color = match label {
        AccuracyLabel::VeryHigh | AccuracyLabel::High => Color::Green,
        AccuracyLabel::Medium => Color::Yellow,
        AccuracyLabel::Low | AccuracyLabel::VeryLow => Color::DarkGrey,
    };
    Cell::new(label).fg(color)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
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
