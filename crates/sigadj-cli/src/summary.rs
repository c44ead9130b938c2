use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sigadj_transform::{NEGATIVE_COUNT_LABEL, POSITIVE_COUNT_LABEL};

use crate::project::DirectoryStatus;
use crate::types::{CoercionResult, TableFlagSummary};

pub fn print_flag_summary(summaries: &[TableFlagSummary]) {
    println!("{}", flag_summary_table(summaries));
    let without_flags: Vec<&str> = summaries
        .iter()
        .filter(|summary| summary.records.is_empty())
        .map(|summary| summary.table.as_str())
        .collect();
    if !without_flags.is_empty() {
        eprintln!("No flag columns in: {}", without_flags.join(", "));
    }
}

/// Flag counts, one row per flag column, with a total row.
pub fn flag_summary_table(summaries: &[TableFlagSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("featureName"),
        header_cell(NEGATIVE_COUNT_LABEL),
        header_cell(POSITIVE_COUNT_LABEL),
        header_cell("Uncoded"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_negative = 0usize;
    let mut total_positive = 0usize;
    for summary in summaries {
        for record in &summary.records {
            total_negative += record.negative_count;
            total_positive += record.positive_count;
            let uncoded = summary.rows.saturating_sub(record.coded_count());
            table.add_row(vec![
                table_cell(&summary.table),
                Cell::new(&record.feature_name),
                Cell::new(record.negative_count),
                count_cell(record.positive_count, Color::Red),
                if uncoded > 0 {
                    Cell::new(uncoded).fg(Color::Yellow)
                } else {
                    dim_cell(uncoded)
                },
                Cell::new(summary.rows),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_negative).add_attribute(Attribute::Bold),
        count_cell(total_positive, Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

pub fn print_coercion(result: &CoercionResult) {
    println!(
        "Table: {} ({} rows, {} column(s) converted)",
        result.table,
        result.rows,
        result.converted_count()
    );
    println!("{}", coercion_table(result));
}

/// Column types before and after coercion.
pub fn coercion_table(result: &CoercionResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Before"),
        header_cell("After"),
    ]);
    apply_table_style(&mut table);
    for change in &result.columns {
        let after = if change.changed() {
            Cell::new(&change.after)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell(&change.after)
        };
        table.add_row(vec![
            Cell::new(&change.column),
            Cell::new(&change.before),
            after,
        ]);
    }
    table
}

pub fn print_directories(statuses: &[(PathBuf, DirectoryStatus)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Directory"), header_cell("Status")]);
    apply_table_style(&mut table);
    for (path, status) in statuses {
        let status_cell = match status {
            DirectoryStatus::Created => Cell::new(status).fg(Color::Green),
            DirectoryStatus::AlreadyExists => dim_cell(status),
        };
        table.add_row(vec![Cell::new(path.display()), status_cell]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
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

fn table_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
