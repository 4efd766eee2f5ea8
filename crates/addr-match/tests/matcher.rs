//! Matching behavior over synthetic test/clean tables.

use addr_match::{ReferenceIndex, isolate_all_fields};
use addr_model::{AddressField, AddressRecord};
use proptest::prelude::*;

fn record(n: usize) -> AddressRecord {
    AddressRecord::new(
        format!("{n} Main St"),
        "Seattle",
        "WA",
        format!("98{n:03}"),
    )
}

/// 10 test rows and 10 clean rows sharing exactly 6 full addresses.
fn tables() -> (Vec<AddressRecord>, Vec<AddressRecord>) {
    let shared: Vec<AddressRecord> = (0..6).map(record).collect();
    let mut test = shared.clone();
    test.extend((100..104).map(record));
    let mut clean = shared;
    clean.extend((200..204).map(record));
    (test, clean)
}

#[test]
fn six_shared_full_addresses_match() {
    let (test, clean) = tables();
    let index = ReferenceIndex::new(&clean);
    assert_eq!(index.full_address_matches(&test), 6);
    let coverage = index.coverage(&test);
    assert_eq!(coverage.total, 10);
    assert!((coverage.percent() - 60.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn full_address_count_ignores_row_order(
        test in Just(tables().0).prop_shuffle(),
        clean in Just(tables().1).prop_shuffle(),
    ) {
        let index = ReferenceIndex::new(&clean);
        prop_assert_eq!(index.full_address_matches(&test), 6);
    }

    #[test]
    fn full_address_has_fixed_separators(
        address in "[0-9A-Za-z ]{1,20}",
        city in "[A-Za-z ]{1,12}",
        state in "[A-Z]{2}",
        zip in "[0-9]{5}",
    ) {
        let record = AddressRecord::new(address.clone(), city.clone(), state.clone(), zip.clone());
        prop_assert_eq!(
            record.full_address(),
            Some(address + ", " + &city + ", " + &state + " " + &zip)
        );
    }
}

#[test]
fn wrong_address_with_matching_city_state_zip_is_isolated() {
    let clean = vec![
        AddressRecord::new("3640 Oak Creek Dr", "Seattle", "WA", "98102"),
        AddressRecord::new("431 6th St", "Seattle", "WA", "98104"),
    ];
    let test = vec![
        AddressRecord::new("431 6th St", "Seattle", "WA", "98104"),
        AddressRecord::new("3640 Oak Creek Dr, Unit 10", "Seattle", "WA", "98102"),
    ];
    let index = ReferenceIndex::new(&clean);

    let report = isolate_all_fields(&index, &test);

    let address = report.get(AddressField::Address).expect("address entry");
    assert_eq!(address.row_indices, vec![1]);
    assert_eq!(address.all_match, 1);
    assert_eq!(address.others_match, 2);
    for field in [AddressField::Zip, AddressField::City, AddressField::State] {
        assert!(report.get(field).expect("field entry").is_empty());
    }
    assert_eq!(report.all_match, 1);
    assert_eq!(report.unattributed, 0);
    // the all-fields subset holds only the first row
    let all = index.projection(&AddressField::ALL);
    assert_eq!(all.matching_rows(&test), vec![0]);
}

#[test]
fn isolation_order_is_zip_city_state_address() {
    let clean = vec![record(1)];
    let index = ReferenceIndex::new(&clean);
    let report = isolate_all_fields(&index, &[record(1)]);
    let order: Vec<AddressField> = report.fields.iter().map(|entry| entry.field).collect();
    assert_eq!(order, AddressField::ISOLATION_ORDER.to_vec());
}
