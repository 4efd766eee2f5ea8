//! Report types for a reconciliation run.

use serde::Serialize;

use addr_match::{IsolationReport, ReferenceIndex};
use addr_model::{AddressRecord, CaseCheck, Coverage, NullCounts, TableProfile};
use addr_normalize::LineEdits;

/// The same match count taken before and after normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoverageComparison {
    pub before: Coverage,
    pub after: Coverage,
}

impl CoverageComparison {
    /// Matches gained (negative if normalization lost matches).
    pub fn gained(&self) -> i64 {
        self.after.matches as i64 - self.before.matches as i64
    }

    /// Change in coverage rate, in percentage points.
    pub fn percent_points(&self) -> f64 {
        self.after.percent() - self.before.percent()
    }
}

/// Full-address coverage of `before` and `after` against the reference table.
pub fn compare_coverage(
    index: &ReferenceIndex<'_>,
    before: &[AddressRecord],
    after: &[AddressRecord],
) -> CoverageComparison {
    CoverageComparison {
        before: index.coverage(before),
        after: index.coverage(after),
    }
}

/// Address-only match counts of `before` and `after` against the reference table.
pub fn compare_address_matches(
    index: &ReferenceIndex<'_>,
    before: &[AddressRecord],
    after: &[AddressRecord],
) -> CoverageComparison {
    CoverageComparison {
        before: Coverage::new(index.address_matches(before), before.len()),
        after: Coverage::new(index.address_matches(after), after.len()),
    }
}

/// What the normalizer did to the test table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationSummary {
    pub changed: usize,
    pub edits: LineEdits,
}

/// Everything a reconciliation run measured.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    pub test: TableProfile,
    pub clean: TableProfile,
    /// Missing values in the test table.
    pub nulls: NullCounts,
    /// Address-only matches before normalization, exact vs case-insensitive.
    pub case_check: CaseCheck,
    pub address_only: CoverageComparison,
    pub full_address: CoverageComparison,
    /// Field isolation over the test table before normalization.
    pub isolation: IsolationReport,
    pub normalization: NormalizationSummary,
}
