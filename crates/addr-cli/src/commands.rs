use anyhow::{Context, Result, anyhow};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::info_span;

use addr_cli::pipeline::run_pipeline;
use addr_normalize::{AddressRule, StreetLine, trace_rules};
use addr_report::{render_json, render_summary};

use crate::cli::{NormalizeArgs, ReconcileArgs, ReportFormatArg};

pub fn run_reconcile(args: &ReconcileArgs) -> Result<()> {
    let options = args.options().map_err(|message| anyhow!(message))?;
    let span = info_span!(
        "reconcile",
        test = %args.test.display(),
        clean = %args.clean.display()
    );
    let _guard = span.enter();
    let report = run_pipeline(&args.test, &args.clean, &options)?;
    match args.format {
        ReportFormatArg::Table => println!("{}", render_summary(&report, options.show_rows)),
        ReportFormatArg::Json => {
            println!("{}", render_json(&report).context("serialize report")?);
        }
    }
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let options = args.options();
    let mut table = Table::new();
    let mut header = vec![header_cell("Input")];
    header.extend(
        AddressRule::ORDER
            .into_iter()
            .filter(|rule| rule.is_enabled(&options))
            .map(|rule| header_cell(rule.as_str())),
    );
    header.push(header_cell("Normalized"));
    table.set_header(header);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for address in &args.addresses {
        let mut row = vec![Cell::new(address)];
        row.extend(
            trace_rules(address, &options)
                .into_iter()
                .map(|(_, value)| Cell::new(value)),
        );
        let (normalized, edits) = StreetLine::parse(address, &options).render(&options);
        let cell = if edits.is_empty() {
            Cell::new(normalized).fg(Color::DarkGrey)
        } else {
            Cell::new(normalized)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        };
        row.push(cell);
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
