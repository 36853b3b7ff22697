use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tailor_cli::report::DraftReport;
use tailor_model::{TagCatalog, time_options};
use tailor_validate::Section;

pub fn emit_report(report: &DraftReport, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("serialize report")?;
        println!("{text}");
        return Ok(());
    }
    print_report(report)
}

fn print_report(report: &DraftReport) -> Result<()> {
    println!("Draft: {}", report.source);
    println!(
        "Events: {} ({} filled)  Tags: {}",
        report.event_count, report.filled_event_count, report.tag_count
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for section in [Section::BasicInfo, Section::Tags, Section::Events] {
        let (status, message) = match report.result.section_error(section) {
            Some(error) => (
                Cell::new("FAIL").fg(Color::Red).add_attribute(Attribute::Bold),
                Cell::new(error.to_string()),
            ),
            None => (Cell::new("OK").fg(Color::Green), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(section.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            status,
            message,
        ]);
    }
    let verdict = if report.is_submittable() {
        Cell::new("READY").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("BLOCKED").fg(Color::Red).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![
        Cell::new("Submission")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        verdict,
        dim_cell(format!("{} failing section(s)", report.result.error_count())),
    ]);
    println!("{table}");

    if let Some(notice) = &report.capacity_notice {
        println!();
        println!("Notice: {notice}");
    }
    if !report.unknown_tags.is_empty() {
        println!();
        println!("Tags not in the catalog: {}", report.unknown_tags.join(", "));
    }
    if !report.rejected_commands.is_empty() {
        print_rejected(report);
    }
    if let Some(payload) = &report.payload {
        let text = serde_json::to_string_pretty(payload).context("serialize payload")?;
        println!();
        println!("Submission payload:");
        println!("{text}");
    }
    Ok(())
}

fn print_rejected(report: &DraftReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Command"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for rejected in &report.rejected_commands {
        table.add_row(vec![
            Cell::new(rejected.position),
            Cell::new(&rejected.op),
            Cell::new(&rejected.reason).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Refused commands:");
    println!("{table}");
}

pub fn print_catalog(catalog: &TagCatalog) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Tags")]);
    apply_table_style(&mut table);
    for category in catalog.categories() {
        table.add_row(vec![
            Cell::new(category.label()).add_attribute(Attribute::Bold),
            Cell::new(category.tags.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn print_times() {
    for time in time_options() {
        println!("{time}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ColumnConstraint::UpperBoundary(Width::Percentage(70)),
    ]);
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
