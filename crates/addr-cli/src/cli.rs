//! CLI argument definitions for the address reconciler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use addr_model::{ColumnNames, NormalizationOptions, ReconcileOptions};

#[derive(Parser)]
#[command(
    name = "address-recon",
    version,
    about = "Measure and improve exact-match coverage of a test address table against a clean reference",
    long_about = "Measure and improve exact-match coverage of a test address table against a clean reference.\n\n\
                  Loads both tables, counts address-only and full-address matches, attributes\n\
                  mismatches to single fields, normalizes street lines and reports the gain."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow street addresses and other row values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full reconciliation pipeline over two address tables.
    Reconcile(ReconcileArgs),

    /// Show how street lines are rewritten, rule by rule.
    Normalize(NormalizeArgs),
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Table with inconsistent formatting to be measured.
    #[arg(value_name = "TEST_CSV")]
    pub test: PathBuf,

    /// Reference table of correctly formatted addresses.
    #[arg(value_name = "CLEAN_CSV")]
    pub clean: PathBuf,

    /// Field delimiter of both input files.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    #[arg(long = "address-column", default_value = "address")]
    pub address_column: String,

    #[arg(long = "city-column", default_value = "city")]
    pub city_column: String,

    #[arg(long = "state-column", default_value = "state")]
    pub state_column: String,

    #[arg(long = "zip-column", default_value = "zip")]
    pub zip_column: String,

    /// Keep ", Unit <digits>" designators.
    #[arg(long = "no-strip-units")]
    pub no_strip_units: bool,

    /// Do not separate house numbers from glued-on street names.
    #[arg(long = "no-split-numbers")]
    pub no_split_numbers: bool,

    /// Rows listed per discrepancy subset.
    #[arg(long = "show-rows", value_name = "N", default_value_t = 10)]
    pub show_rows: usize,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

impl ReconcileArgs {
    /// Build run options from the parsed flags.
    ///
    /// Fails when the delimiter is not an ASCII character.
    pub fn options(&self) -> Result<ReconcileOptions, String> {
        if !self.delimiter.is_ascii() {
            return Err(format!(
                "delimiter must be an ASCII character, got {:?}",
                self.delimiter
            ));
        }
        let delimiter = self.delimiter as u8;
        Ok(ReconcileOptions {
            columns: ColumnNames {
                address: self.address_column.clone(),
                city: self.city_column.clone(),
                state: self.state_column.clone(),
                zip: self.zip_column.clone(),
            },
            normalization: NormalizationOptions::default()
                .with_strip_units(!self.no_strip_units)
                .with_separate_numbers(!self.no_split_numbers),
            delimiter,
            show_rows: self.show_rows,
        })
    }
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Street lines to normalize.
    #[arg(value_name = "ADDRESS", required = true)]
    pub addresses: Vec<String>,

    /// Keep ", Unit <digits>" designators.
    #[arg(long = "no-strip-units")]
    pub no_strip_units: bool,

    /// Do not separate house numbers from glued-on street names.
    #[arg(long = "no-split-numbers")]
    pub no_split_numbers: bool,
}

impl NormalizeArgs {
    pub fn options(&self) -> NormalizationOptions {
        NormalizationOptions::default()
            .with_strip_units(!self.no_strip_units)
            .with_separate_numbers(!self.no_split_numbers)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_flags_build_options() {
        let cli = Cli::parse_from([
            "address-recon",
            "reconcile",
            "test.csv",
            "clean.csv",
            "--delimiter",
            ";",
            "--zip-column",
            "postcode",
            "--no-strip-units",
            "--show-rows",
            "3",
        ]);
        let Command::Reconcile(args) = cli.command else {
            panic!("expected reconcile");
        };
        let options = args.options().expect("options");
        assert_eq!(options.delimiter, b';');
        assert_eq!(options.columns.zip, "postcode");
        assert_eq!(options.columns.address, "address");
        assert!(!options.normalization.strip_units);
        assert!(options.normalization.separate_numbers);
        assert_eq!(options.show_rows, 3);
    }

    #[test]
    fn non_ascii_delimiter_rejected() {
        let cli = Cli::parse_from([
            "address-recon",
            "reconcile",
            "a.csv",
            "b.csv",
            "--delimiter",
            "§",
        ]);
        let Command::Reconcile(args) = cli.command else {
            panic!("expected reconcile");
        };
        assert!(args.options().is_err());
    }

    #[test]
    fn normalize_requires_an_address() {
        assert!(Cli::try_parse_from(["address-recon", "normalize"]).is_err());
    }
}
