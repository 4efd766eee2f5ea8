//! Integration tests for the reconciliation pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use addr_cli::pipeline::{load, run_pipeline};
use addr_model::{AddressField, Coverage, NormalizationOptions, ReconcileOptions};

const CLEAN_CSV: &str = "\
address,city,state,zip
3640 Oak Creek Dr,Seattle,WA,98102
9690 Canon Way,Austin,TX,78701
431 6th St,Seattle,WA,98104
12 Elm St,Boise,ID,83702
77 Pine Rd,Denver,CO,80202
";

const TEST_CSV: &str = "\
address,city,state,zip,policy
9690Canon Way,Austin,TX,78701.0,P1
12 Elm St,Boise,ID,83702,P2
\"3640 Oak Creek Dr, Unit 10\",Seattle,WA,98102,P3
431 6th St,Seattle,WA,98104,P4
77 Pine Rd,,CO,80202,P5
5 Main St,Austin,TX,78701,P6
";

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn pipeline_reports_before_and_after_coverage() {
    let dir = tempfile::tempdir().unwrap();
    let test = write_csv(dir.path(), "test.csv", TEST_CSV);
    let clean = write_csv(dir.path(), "clean.csv", CLEAN_CSV);

    let report = run_pipeline(&test, &clean, &ReconcileOptions::default()).unwrap();

    assert_eq!(report.test.rows, 6);
    assert_eq!(report.clean.rows, 5);
    assert!(report.test.columns.iter().any(|c| c.name == "policy"));

    assert_eq!(report.nulls.city, 1);
    assert_eq!(report.nulls.city_and_state, 0);
    assert_eq!(report.nulls.full_address, 1);

    assert_eq!(report.case_check.exact, 3);
    assert_eq!(report.case_check.gain(), 0);

    assert_eq!(report.address_only.before, Coverage::new(3, 6));
    assert_eq!(report.address_only.after, Coverage::new(5, 6));
    assert_eq!(report.full_address.before, Coverage::new(2, 6));
    assert_eq!(report.full_address.after, Coverage::new(4, 6));
    assert_eq!(report.full_address.gained(), 2);

    assert_eq!(report.normalization.changed, 2);
    assert_eq!(report.normalization.edits.units_removed, 1);
    assert_eq!(report.normalization.edits.numbers_separated, 1);
}

#[test]
fn pipeline_isolates_single_field_mismatches() {
    let dir = tempfile::tempdir().unwrap();
    let test = write_csv(dir.path(), "test.csv", TEST_CSV);
    let clean = write_csv(dir.path(), "clean.csv", CLEAN_CSV);

    let report = run_pipeline(&test, &clean, &ReconcileOptions::default()).unwrap();
    let isolation = &report.isolation;

    assert_eq!(isolation.all_match, 2);
    assert_eq!(isolation.unattributed, 0);
    let address = isolation.get(AddressField::Address).unwrap();
    assert_eq!(address.row_indices, vec![0, 2, 5]);
    assert_eq!(address.all_match, 2);
    let city = isolation.get(AddressField::City).unwrap();
    assert_eq!(city.row_indices, vec![4]);
    assert!(isolation.get(AddressField::Zip).unwrap().is_empty());
    assert!(isolation.get(AddressField::State).unwrap().is_empty());
}

#[test]
fn disabled_normalization_keeps_coverage() {
    let dir = tempfile::tempdir().unwrap();
    let test = write_csv(dir.path(), "test.csv", TEST_CSV);
    let clean = write_csv(dir.path(), "clean.csv", CLEAN_CSV);
    let options = ReconcileOptions {
        normalization: NormalizationOptions::default()
            .with_strip_units(false)
            .with_separate_numbers(false),
        ..ReconcileOptions::default()
    };

    let report = run_pipeline(&test, &clean, &options).unwrap();

    assert_eq!(report.full_address.before, report.full_address.after);
    assert_eq!(report.normalization.changed, 0);
}

#[test]
fn load_keeps_raw_test_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let test = write_csv(dir.path(), "test.csv", TEST_CSV);
    let clean = write_csv(dir.path(), "clean.csv", CLEAN_CSV);

    let tables = load(&test, &clean, &ReconcileOptions::default()).unwrap();
    let records = tables.test.records().unwrap();

    assert_eq!(records[0].zip.as_deref(), Some("78701"));
    assert_eq!(
        records[0].full_address().as_deref(),
        Some("9690Canon Way, Austin, TX 78701")
    );
    assert_eq!(records[4].full_address(), None);
}

#[test]
fn case_check_detects_casing_defects() {
    let dir = tempfile::tempdir().unwrap();
    let test = write_csv(
        dir.path(),
        "test.csv",
        "address,city,state,zip\n12 elm st,Boise,ID,83702\n",
    );
    let clean = write_csv(dir.path(), "clean.csv", CLEAN_CSV);

    let report = run_pipeline(&test, &clean, &ReconcileOptions::default()).unwrap();

    assert_eq!(report.case_check.exact, 0);
    assert_eq!(report.case_check.case_insensitive, 1);
    assert_eq!(report.full_address.after.matches, 0);
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let clean = write_csv(dir.path(), "clean.csv", CLEAN_CSV);

    let error = run_pipeline(
        &dir.path().join("absent.csv"),
        &clean,
        &ReconcileOptions::default(),
    )
    .unwrap_err();

    assert!(format!("{error:#}").contains("load test table"));
}

#[test]
fn missing_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let test = write_csv(dir.path(), "test.csv", "address,city,state\n1 Main St,Boise,ID\n");
    let clean = write_csv(dir.path(), "clean.csv", CLEAN_CSV);

    let error = run_pipeline(&test, &clean, &ReconcileOptions::default()).unwrap_err();

    assert!(format!("{error:#}").contains("zip"));
}
