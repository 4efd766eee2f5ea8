//! Field-isolation diagnostics.
//!
//! For a field F, a test row is a discrepancy for F when its values for every
//! other field appear together on some clean row, and its four-field tuple
//! does not appear on any clean row. The check attributes a mismatch to F
//! only under the assumption that at most one field is wrong per row: a row
//! with two wrong fields falls into no subset. Such rows are counted as
//! unattributed rather than guessed at.

use serde::Serialize;
use tracing::debug;

use addr_model::{AddressField, AddressRecord, FieldDiscrepancy};

use crate::ReferenceIndex;

/// Discrepancy subsets for every field plus the rows none of them explain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsolationReport {
    /// One entry per field, in [`AddressField::ISOLATION_ORDER`].
    pub fields: Vec<FieldDiscrepancy>,
    /// Rows matching clean on all four fields.
    pub all_match: usize,
    /// Rows that fail the four-field match and fall in no discrepancy subset.
    pub unattributed: usize,
}

impl IsolationReport {
    pub fn get(&self, field: AddressField) -> Option<&FieldDiscrepancy> {
        self.fields.iter().find(|entry| entry.field == field)
    }
}

/// Isolate the test rows where only `field` disagrees with the clean table.
pub fn isolate_field(
    index: &ReferenceIndex<'_>,
    test: &[AddressRecord],
    field: AddressField,
) -> FieldDiscrepancy {
    let others = index.projection(&field.others());
    let all = index.projection(&AddressField::ALL);
    let mut others_match = 0usize;
    let mut all_match = 0usize;
    let mut row_indices = Vec::new();
    for (idx, record) in test.iter().enumerate() {
        let in_all = all.contains(record);
        if in_all {
            all_match += 1;
        }
        if others.contains(record) {
            others_match += 1;
            if !in_all {
                row_indices.push(idx);
            }
        }
    }
    debug!(
        field = %field,
        others_match,
        all_match,
        discrepancies = row_indices.len(),
        "field isolation"
    );
    let rows = row_indices.iter().map(|idx| test[*idx].clone()).collect();
    FieldDiscrepancy {
        field,
        others_match,
        all_match,
        row_indices,
        rows,
    }
}

/// Run [`isolate_field`] for every field and count unattributed mismatches.
pub fn isolate_all_fields(index: &ReferenceIndex<'_>, test: &[AddressRecord]) -> IsolationReport {
    let fields: Vec<FieldDiscrepancy> = AddressField::ISOLATION_ORDER
        .into_iter()
        .map(|field| isolate_field(index, test, field))
        .collect();
    let all = index.projection(&AddressField::ALL);
    let mut attributed = vec![false; test.len()];
    for entry in &fields {
        for idx in &entry.row_indices {
            attributed[*idx] = true;
        }
    }
    let mut all_match = 0usize;
    let mut unattributed = 0usize;
    for (idx, record) in test.iter().enumerate() {
        if all.contains(record) {
            all_match += 1;
        } else if !attributed[idx] {
            unattributed += 1;
        }
    }
    IsolationReport {
        fields,
        all_match,
        unattributed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_discrepancy_isolated() {
        let clean = vec![AddressRecord::new("1 Main St", "Boise", "ID", "83702")];
        let index = ReferenceIndex::new(&clean);
        let test = vec![
            AddressRecord::new("1 Main St", "Boise", "ID", "83702"),
            AddressRecord::new("1 Main St", "Boise", "ID", "99999"),
        ];
        let zip = isolate_field(&index, &test, AddressField::Zip);
        assert_eq!(zip.others_match, 2);
        assert_eq!(zip.all_match, 1);
        assert_eq!(zip.row_indices, vec![1]);
        assert_eq!(zip.rows[0].zip.as_deref(), Some("99999"));
    }

    #[test]
    fn two_wrong_fields_are_unattributed() {
        let clean = vec![AddressRecord::new("1 Main St", "Boise", "ID", "83702")];
        let index = ReferenceIndex::new(&clean);
        let test = vec![AddressRecord::new("1 Main Street", "Boise", "ID", "99999")];
        let report = isolate_all_fields(&index, &test);
        assert!(report.fields.iter().all(FieldDiscrepancy::is_empty));
        assert_eq!(report.all_match, 0);
        assert_eq!(report.unattributed, 1);
    }

    #[test]
    fn missing_city_is_attributed_to_city() {
        let clean = vec![AddressRecord::new("1 Main St", "Boise", "ID", "83702")];
        let index = ReferenceIndex::new(&clean);
        let test = vec![AddressRecord {
            city: None,
            ..AddressRecord::new("1 Main St", "", "ID", "83702")
        }];
        let report = isolate_all_fields(&index, &test);
        assert_eq!(report.get(AddressField::City).map(FieldDiscrepancy::count), Some(1));
        assert_eq!(report.unattributed, 0);
    }
}
