//! Console rendering of a reconciliation report.

use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addr_model::{AddressField, AddressRecord, Coverage, FieldDiscrepancy};

use crate::{CoverageComparison, ReconcileReport};

/// One-line before/after summary.
pub fn coverage_line(label: &str, comparison: &CoverageComparison) -> String {
    let gained = comparison.gained();
    let sign = if gained >= 0 { "+" } else { "" };
    format!(
        "{label}: {} -> {} of {} ({:.2}% -> {:.2}%, {sign}{gained})",
        comparison.before.matches,
        comparison.after.matches,
        comparison.after.total,
        comparison.before.percent(),
        comparison.after.percent(),
    )
}

/// Pretty-printed JSON of the whole report.
pub fn render_json(report: &ReconcileReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Render every section of the report. At most `show_rows` rows are listed
/// per discrepancy subset.
pub fn render_summary(report: &ReconcileReport, show_rows: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Tables:");
    let _ = writeln!(out, "{}", profile_table(report));
    let _ = writeln!(out);
    let _ = writeln!(out, "Missing values ({}):", report.test.name);
    let _ = writeln!(out, "{}", null_table(report));
    let _ = writeln!(
        out,
        "Rows missing both city and state: {}",
        report.nulls.city_and_state
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Matches:");
    let _ = writeln!(out, "{}", checkpoint_table(report));
    if report.case_check.gain() > 0 {
        let _ = writeln!(
            out,
            "Ignoring case adds {} address matches; casing differs between the tables.",
            report.case_check.gain()
        );
    } else {
        let _ = writeln!(out, "Ignoring case adds no address matches.");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Field isolation:");
    let _ = writeln!(out, "{}", isolation_table(report));
    let _ = writeln!(
        out,
        "Rows matching on all fields: {}; unattributed mismatches (more than one field differs): {}",
        report.isolation.all_match, report.isolation.unattributed
    );
    for entry in &report.isolation.fields {
        if entry.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Rows where only {} differs ({}):",
            entry.field,
            entry.count()
        );
        let _ = writeln!(out, "{}", discrepancy_rows_table(entry, show_rows));
        if entry.count() > show_rows {
            let _ = writeln!(out, "... {} more", entry.count() - show_rows);
        }
    }
    let _ = writeln!(out);
    let edits = &report.normalization.edits;
    let _ = writeln!(
        out,
        "Normalization: {} addresses rewritten ({} units removed, {} numbers separated, {} ordinals joined)",
        report.normalization.changed,
        edits.units_removed,
        edits.numbers_separated,
        edits.ordinals_joined
    );
    let _ = writeln!(
        out,
        "{}",
        coverage_line("Address-only matches", &report.address_only)
    );
    let _ = write!(
        out,
        "{}",
        coverage_line("Full-address matches", &report.full_address)
    );
    out
}

fn profile_table(report: &ReconcileReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for profile in [&report.test, &report.clean] {
        let columns = profile
            .columns
            .iter()
            .map(|column| format!("{} ({})", column.name, column.dtype))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(&profile.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(profile.rows),
            Cell::new(columns),
        ]);
    }
    table
}

fn null_table(report: &ReconcileReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for field in AddressField::ALL {
        table.add_row(vec![
            Cell::new(field),
            count_cell(report.nulls.get(field), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("full address").add_attribute(Attribute::Bold),
        count_cell(report.nulls.full_address, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

fn checkpoint_table(report: &ReconcileReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Checkpoint"),
        header_cell("Matches"),
        header_cell("Rows"),
        header_cell("Coverage"),
    ]);
    apply_summary_table_style(&mut table);
    for idx in 1..=3 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    let case_insensitive = Coverage::new(
        report.case_check.case_insensitive,
        report.address_only.before.total,
    );
    let rows = [
        ("Address only, before", report.address_only.before),
        ("Address only, ignoring case", case_insensitive),
        ("Full address, before", report.full_address.before),
        ("Address only, after", report.address_only.after),
        ("Full address, after", report.full_address.after),
    ];
    for (label, coverage) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(coverage.matches),
            Cell::new(coverage.total),
            Cell::new(format!("{:.2}%", coverage.percent())),
        ]);
    }
    table
}

fn isolation_table(report: &ReconcileReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Others match"),
        header_cell("All match"),
        header_cell("Only this differs"),
    ]);
    apply_summary_table_style(&mut table);
    for idx in 1..=3 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for entry in &report.isolation.fields {
        table.add_row(vec![
            Cell::new(entry.field)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.others_match),
            Cell::new(entry.all_match),
            count_cell(entry.count(), Color::Red),
        ]);
    }
    table
}

fn discrepancy_rows_table(entry: &FieldDiscrepancy, show_rows: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Address"),
        header_cell("City"),
        header_cell("State"),
        header_cell("Zip"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, record) in entry.row_indices.iter().zip(&entry.rows).take(show_rows) {
        let mut cells = vec![Cell::new(idx)];
        cells.extend(
            AddressField::ALL
                .into_iter()
                .map(|field| field_cell(record, field, field == entry.field)),
        );
        table.add_row(cells);
    }
    table
}

fn field_cell(record: &AddressRecord, field: AddressField, highlight: bool) -> Cell {
    match record.get(field) {
        Some(value) if highlight => Cell::new(value).fg(Color::Red),
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
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
        .set_width(120);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use addr_match::{ReferenceIndex, isolate_all_fields};
    use addr_model::{CaseCheck, NullCounts, TableProfile};
    use addr_normalize::LineEdits;

    use super::*;
    use crate::NormalizationSummary;

    fn profile(name: &str, rows: usize) -> TableProfile {
        TableProfile {
            name: name.to_string(),
            rows,
            columns: Vec::new(),
        }
    }

    fn sample_report() -> ReconcileReport {
        let clean = vec![
            AddressRecord::new("1 Main St", "Boise", "ID", "83702"),
            AddressRecord::new("2 Main St", "Boise", "ID", "83702"),
            AddressRecord::new("3 Main St", "Boise", "ID", "83702"),
        ];
        let test = vec![
            AddressRecord::new("1 Main St", "Boise", "ID", "83702"),
            AddressRecord::new("2 Main St", "Boise", "ID", "99999"),
            AddressRecord::new("3 Main St", "Boise", "ID", "99999"),
        ];
        let index = ReferenceIndex::new(&clean);
        ReconcileReport {
            test: profile("test", 3),
            clean: profile("clean", 3),
            nulls: NullCounts {
                rows: 3,
                ..NullCounts::default()
            },
            case_check: CaseCheck {
                exact: 3,
                case_insensitive: 3,
            },
            address_only: CoverageComparison {
                before: Coverage::new(3, 3),
                after: Coverage::new(3, 3),
            },
            full_address: CoverageComparison {
                before: Coverage::new(1, 3),
                after: Coverage::new(1, 3),
            },
            isolation: isolate_all_fields(&index, &test),
            normalization: NormalizationSummary {
                changed: 0,
                edits: LineEdits::default(),
            },
        }
    }

    #[test]
    fn coverage_line_shows_before_and_after() {
        let comparison = CoverageComparison {
            before: Coverage::new(6, 10),
            after: Coverage::new(8, 10),
        };
        insta::assert_snapshot!(
            coverage_line("Full-address matches", &comparison),
            @"Full-address matches: 6 -> 8 of 10 (60.00% -> 80.00%, +2)"
        );
    }

    #[test]
    fn coverage_line_shows_losses() {
        let comparison = CoverageComparison {
            before: Coverage::new(2, 4),
            after: Coverage::new(1, 4),
        };
        insta::assert_snapshot!(
            coverage_line("Address-only matches", &comparison),
            @"Address-only matches: 2 -> 1 of 4 (50.00% -> 25.00%, -1)"
        );
    }

    #[test]
    fn summary_limits_listed_rows() {
        let report = sample_report();
        let text = render_summary(&report, 1);

        assert!(text.contains("Rows where only zip differs (2):"));
        assert!(text.contains("... 1 more"));
        assert!(text.contains("Ignoring case adds no address matches."));
        assert!(text.ends_with("(33.33% -> 33.33%, +0)"));
    }

    #[test]
    fn json_output_carries_isolation_rows() {
        let report = sample_report();
        let json = render_json(&report).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

        assert_eq!(value["full_address"]["before"]["matches"], 1);
        assert_eq!(value["isolation"]["fields"][0]["field"], "zip");
        assert_eq!(value["isolation"]["fields"][0]["row_indices"][1], 2);
    }
}
