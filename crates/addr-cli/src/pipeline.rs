//! Reconciliation pipeline with explicit stages.
//!
//! 1. **Load**: read both tables, retype zip, derive the full address
//! 2. **Measure**: profiles, null counts, case check, match counts before cleanup
//! 3. **Diagnose**: field isolation over the raw test table
//! 4. **Normalize**: rewrite street lines into a new test table
//! 5. **Report**: recount matches on the normalized table
//!
//! Each stage takes table snapshots and returns new values; the loaded test
//! table is still available after normalization.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use addr_ingest::{LoadOptions, load_address_table, null_counts};
use addr_match::{IsolationReport, ReferenceIndex, isolate_all_fields};
use addr_model::{
    AddressRecord, AddressTable, CaseCheck, Coverage, NormalizationOptions, NullCounts,
    ReconcileOptions,
};
use addr_normalize::{NormalizedTable, normalize_table};
use addr_report::{NormalizationSummary, ReconcileReport, compare_address_matches, compare_coverage};

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Both tables as loaded. The derived full-address column is kept for the
/// table profiles; matching works on records.
#[derive(Debug, Clone)]
pub struct LoadedTables {
    pub test: AddressTable,
    pub clean: AddressTable,
}

pub fn load(test: &Path, clean: &Path, options: &ReconcileOptions) -> Result<LoadedTables> {
    let span = info_span!("load");
    let _guard = span.enter();
    let start = Instant::now();
    let load_options = LoadOptions::from(options);
    let test = load_address_table("test", test, &load_options)
        .with_context(|| format!("load test table {}", test.display()))?
        .with_full_address()
        .context("derive test full address")?;
    let clean = load_address_table("clean", clean, &load_options)
        .with_context(|| format!("load clean table {}", clean.display()))?
        .with_full_address()
        .context("derive clean full address")?;
    info!(
        test_rows = test.height(),
        clean_rows = clean.height(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(LoadedTables { test, clean })
}

// ============================================================================
// Stage 2: Measure
// ============================================================================

/// Counts taken on the raw test table.
#[derive(Debug, Clone, Copy)]
pub struct Measurements {
    pub nulls: NullCounts,
    pub case_check: CaseCheck,
    pub full_address: Coverage,
}

pub fn measure(index: &ReferenceIndex<'_>, test: &[AddressRecord]) -> Measurements {
    let span = info_span!("measure");
    let _guard = span.enter();
    let start = Instant::now();
    let nulls = null_counts(test);
    let case_check = index.case_check(test);
    let full_address = index.coverage(test);
    info!(
        address_matches = case_check.exact,
        case_insensitive_matches = case_check.case_insensitive,
        full_address_matches = full_address.matches,
        rows = full_address.total,
        missing_full_address = nulls.full_address,
        duration_ms = start.elapsed().as_millis(),
        "measure complete"
    );
    Measurements {
        nulls,
        case_check,
        full_address,
    }
}

// ============================================================================
// Stage 3: Diagnose
// ============================================================================

pub fn diagnose(index: &ReferenceIndex<'_>, test: &[AddressRecord]) -> IsolationReport {
    let span = info_span!("diagnose");
    let _guard = span.enter();
    let start = Instant::now();
    let report = isolate_all_fields(index, test);
    info!(
        all_match = report.all_match,
        unattributed = report.unattributed,
        duration_ms = start.elapsed().as_millis(),
        "diagnose complete"
    );
    report
}

// ============================================================================
// Stage 4: Normalize
// ============================================================================

pub fn normalize(
    test: &AddressTable,
    options: &NormalizationOptions,
) -> Result<NormalizedTable> {
    let span = info_span!("normalize");
    let _guard = span.enter();
    if options.is_noop() {
        debug!("all street-line rules disabled");
    }
    let mut normalized = normalize_table(test, options).context("normalize street lines")?;
    normalized.table = normalized
        .table
        .with_full_address()
        .context("derive normalized full address")?;
    Ok(normalized)
}

// ============================================================================
// Stage 5: Report
// ============================================================================

/// Inputs of the report stage.
pub struct ReportInput<'a> {
    pub tables: &'a LoadedTables,
    pub index: &'a ReferenceIndex<'a>,
    pub before: &'a [AddressRecord],
    pub after: &'a [AddressRecord],
    pub measurements: Measurements,
    pub isolation: IsolationReport,
    pub normalized: &'a NormalizedTable,
}

pub fn report(input: ReportInput<'_>) -> ReconcileReport {
    let span = info_span!("report");
    let _guard = span.enter();
    let address_only = compare_address_matches(input.index, input.before, input.after);
    let full_address = compare_coverage(input.index, input.before, input.after);
    debug_assert_eq!(full_address.before, input.measurements.full_address);
    info!(
        before = full_address.before.matches,
        after = full_address.after.matches,
        rows = full_address.after.total,
        "full-address coverage"
    );
    ReconcileReport {
        test: input.tables.test.profile(),
        clean: input.tables.clean.profile(),
        nulls: input.measurements.nulls,
        case_check: input.measurements.case_check,
        address_only,
        full_address,
        isolation: input.isolation,
        normalization: NormalizationSummary {
            changed: input.normalized.changed(),
            edits: input.normalized.edits,
        },
    }
}

/// Run every stage over the two files.
pub fn run_pipeline(
    test: &Path,
    clean: &Path,
    options: &ReconcileOptions,
) -> Result<ReconcileReport> {
    let start = Instant::now();
    let tables = load(test, clean, options)?;
    let clean_records = tables.clean.records().context("read clean records")?;
    let before = tables.test.records().context("read test records")?;
    let index = ReferenceIndex::new(&clean_records);

    let measurements = measure(&index, &before);
    let isolation = diagnose(&index, &before);
    let normalized = normalize(&tables.test, &options.normalization)?;
    let after = normalized
        .table
        .records()
        .context("read normalized records")?;

    let reconcile_report = report(ReportInput {
        tables: &tables,
        index: &index,
        before: &before,
        after: &after,
        measurements,
        isolation,
        normalized: &normalized,
    });
    info!(
        gained = reconcile_report.full_address.gained(),
        duration_ms = start.elapsed().as_millis(),
        "reconciliation complete"
    );
    Ok(reconcile_report)
}
