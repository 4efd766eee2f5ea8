//! Reconciliation reporting.
//!
//! - **report**: the report assembled by a run and before/after comparisons
//! - **summary**: console rendering (comfy-table) and JSON output

pub mod report;
pub mod summary;

pub use report::{
    CoverageComparison, NormalizationSummary, ReconcileReport, compare_address_matches,
    compare_coverage,
};
pub use summary::{coverage_line, render_json, render_summary};
