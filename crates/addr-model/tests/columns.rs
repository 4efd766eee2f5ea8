//! Address tables over non-default source column names.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use addr_model::{AddressField, AddressTable, ColumnNames, FULL_ADDRESS_COLUMN, ReconcileError};

fn text_column(name: &str, values: &[Option<&str>]) -> Column {
    let values: Vec<Option<String>> = values.iter().map(|v| v.map(String::from)).collect();
    Series::new(name.into(), values).into_column()
}

fn custom_columns() -> ColumnNames {
    ColumnNames {
        address: "street".to_string(),
        city: "town".to_string(),
        state: "region".to_string(),
        zip: "postcode".to_string(),
    }
}

fn frame() -> DataFrame {
    DataFrame::new(vec![
        text_column("street", &[Some("12 Elm St"), Some("  ")]),
        text_column("town", &[Some("Boise"), Some("Denver")]),
        text_column("region", &[Some("ID"), None]),
        text_column("postcode", &[Some("83702"), Some("80202")]),
        text_column("policy", &[Some("P1"), Some("P2")]),
    ])
    .unwrap()
}

#[test]
fn records_follow_configured_column_names() {
    let table = AddressTable::new("test", frame(), custom_columns()).unwrap();
    let records = table.records().unwrap();

    assert_eq!(records[0].address.as_deref(), Some("12 Elm St"));
    assert_eq!(records[0].zip.as_deref(), Some("83702"));
    assert_eq!(records[1].address.as_deref(), Some("  "));
    assert_eq!(records[1].state, None);
    assert_eq!(
        table.field_values(AddressField::City).unwrap(),
        vec![Some("Boise".to_string()), Some("Denver".to_string())]
    );
}

#[test]
fn derived_columns_keep_source_columns() {
    let table = AddressTable::new("test", frame(), custom_columns())
        .unwrap()
        .with_full_address()
        .unwrap();
    let names: Vec<String> = table
        .profile()
        .columns
        .into_iter()
        .map(|column| column.name)
        .collect();

    assert_eq!(
        names,
        vec!["street", "town", "region", "postcode", "policy", FULL_ADDRESS_COLUMN]
    );
    let full = table.data.column(FULL_ADDRESS_COLUMN).unwrap();
    assert_eq!(full.str().unwrap().get(0), Some("12 Elm St, Boise, ID 83702"));
    assert_eq!(full.str().unwrap().get(1), None);
}

#[test]
fn full_address_column_agrees_with_records() {
    let table = AddressTable::new("test", frame(), custom_columns())
        .unwrap()
        .with_full_address()
        .unwrap();
    let column = table.data.column(FULL_ADDRESS_COLUMN).unwrap();
    let column = column.str().unwrap();

    for (idx, record) in table.records().unwrap().iter().enumerate() {
        assert_eq!(column.get(idx), record.full_address().as_deref(), "row {idx}");
    }
}

#[test]
fn default_names_do_not_match_custom_frame() {
    let error = AddressTable::new("clean", frame(), ColumnNames::default()).unwrap_err();

    assert!(matches!(error, ReconcileError::MissingColumn { ref table, .. } if table == "clean"));
    assert_eq!(error.to_string(), "clean: missing required column `address`");
}
