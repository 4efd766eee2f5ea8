//! Lookup sets built from the clean reference table.

use std::collections::HashSet;

use addr_model::{AddressField, AddressRecord, CaseCheck, Coverage};

/// Set of projected field tuples present in the reference table.
///
/// Reference rows missing any projected field contribute nothing, and test
/// rows missing any projected field never match.
#[derive(Debug, Clone)]
pub struct ProjectionIndex<'a> {
    fields: Vec<AddressField>,
    keys: HashSet<Vec<&'a str>>,
}

impl<'a> ProjectionIndex<'a> {
    pub fn new(reference: &'a [AddressRecord], fields: &[AddressField]) -> Self {
        let keys = reference
            .iter()
            .filter_map(|record| record.project(fields))
            .collect();
        Self {
            fields: fields.to_vec(),
            keys,
        }
    }

    /// Number of distinct tuples in the reference table.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, record: &AddressRecord) -> bool {
        record
            .project(&self.fields)
            .is_some_and(|key| self.keys.contains(&key))
    }

    /// Positions of the rows in `records` whose projection is present.
    pub fn matching_rows(&self, records: &[AddressRecord]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.contains(record))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of rows in `records` whose projection is present.
    pub fn count_matches(&self, records: &[AddressRecord]) -> usize {
        records.iter().filter(|record| self.contains(record)).count()
    }
}

/// Lookup sets over the clean table for the checks that run more than once.
#[derive(Debug, Clone)]
pub struct ReferenceIndex<'a> {
    reference: &'a [AddressRecord],
    addresses: HashSet<&'a str>,
    addresses_lower: HashSet<String>,
    full_addresses: HashSet<String>,
}

impl<'a> ReferenceIndex<'a> {
    pub fn new(reference: &'a [AddressRecord]) -> Self {
        let addresses: HashSet<&'a str> = reference
            .iter()
            .filter_map(|record| record.address.as_deref())
            .collect();
        let addresses_lower = addresses.iter().map(|value| value.to_lowercase()).collect();
        let full_addresses = reference
            .iter()
            .filter_map(AddressRecord::full_address)
            .collect();
        Self {
            reference,
            addresses,
            addresses_lower,
            full_addresses,
        }
    }

    /// Projection index over an arbitrary field subset of the reference rows.
    pub fn projection(&self, fields: &[AddressField]) -> ProjectionIndex<'a> {
        ProjectionIndex::new(self.reference, fields)
    }

    /// Test rows whose street address appears anywhere in the reference
    /// address column, regardless of the other fields.
    pub fn address_matches(&self, test: &[AddressRecord]) -> usize {
        test.iter()
            .filter(|record| {
                record
                    .address
                    .as_deref()
                    .is_some_and(|address| self.addresses.contains(address))
            })
            .count()
    }

    /// Address-only matches with and without case sensitivity.
    pub fn case_check(&self, test: &[AddressRecord]) -> CaseCheck {
        let case_insensitive = test
            .iter()
            .filter(|record| {
                record
                    .address
                    .as_deref()
                    .is_some_and(|address| self.addresses_lower.contains(&address.to_lowercase()))
            })
            .count();
        CaseCheck {
            exact: self.address_matches(test),
            case_insensitive,
        }
    }

    pub fn is_full_match(&self, record: &AddressRecord) -> bool {
        record
            .full_address()
            .is_some_and(|full| self.full_addresses.contains(&full))
    }

    /// Test rows whose full-address string appears in the reference table.
    pub fn full_address_matches(&self, test: &[AddressRecord]) -> usize {
        test.iter().filter(|record| self.is_full_match(record)).count()
    }

    /// Full-address coverage of `test`.
    pub fn coverage(&self, test: &[AddressRecord]) -> Coverage {
        Coverage::new(self.full_address_matches(test), test.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean() -> Vec<AddressRecord> {
        vec![
            AddressRecord::new("1 Main St", "Boise", "ID", "83702"),
            AddressRecord::new("2 Oak Ave", "Reno", "NV", "89501"),
        ]
    }

    #[test]
    fn address_match_ignores_other_fields() {
        let clean = clean();
        let index = ReferenceIndex::new(&clean);
        let test = vec![
            AddressRecord::new("1 Main St", "Nampa", "ID", "83651"),
            AddressRecord::new("3 Pine Rd", "Boise", "ID", "83702"),
        ];
        assert_eq!(index.address_matches(&test), 1);
        assert_eq!(index.full_address_matches(&test), 0);
    }

    #[test]
    fn matching_is_case_and_whitespace_sensitive() {
        let clean = clean();
        let index = ReferenceIndex::new(&clean);
        let test = vec![
            AddressRecord::new("1 MAIN ST", "Boise", "ID", "83702"),
            AddressRecord::new("2 Oak  Ave", "Reno", "NV", "89501"),
        ];
        assert_eq!(index.full_address_matches(&test), 0);
        let check = index.case_check(&test);
        assert_eq!(check.exact, 0);
        assert_eq!(check.case_insensitive, 1);
        assert_eq!(check.gain(), 1);
    }

    #[test]
    fn missing_values_never_match() {
        let mut clean = clean();
        clean.push(AddressRecord {
            city: None,
            ..AddressRecord::new("4 Elm St", "", "ID", "83702")
        });
        let index = ReferenceIndex::new(&clean);
        let test = vec![AddressRecord {
            city: None,
            ..AddressRecord::new("4 Elm St", "", "ID", "83702")
        }];
        assert_eq!(index.full_address_matches(&test), 0);
        let projection = index.projection(&AddressField::ALL);
        assert_eq!(projection.count_matches(&test), 0);
        assert_eq!(projection.len(), 2);
    }

    #[test]
    fn projection_matches_tuples_not_columns() {
        let clean = clean();
        let index = ReferenceIndex::new(&clean);
        // city from one clean row, state from another: no single row has both
        let test = vec![AddressRecord::new("9 Any St", "Boise", "NV", "00000")];
        let projection = index.projection(&[AddressField::City, AddressField::State]);
        assert_eq!(projection.matching_rows(&test), Vec::<usize>::new());
    }
}
