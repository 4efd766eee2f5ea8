//! Result types produced by the matcher.

use serde::Serialize;

use crate::{AddressField, AddressRecord};

/// Exact-match count against a row total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub matches: usize,
    pub total: usize,
}

impl Coverage {
    pub fn new(matches: usize, total: usize) -> Self {
        Self { matches, total }
    }

    /// Coverage rate as a percentage. An empty table has 0% coverage.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matches as f64 * 100.0 / self.total as f64
        }
    }

    /// Rows without an exact match.
    pub fn unmatched(&self) -> usize {
        self.total.saturating_sub(self.matches)
    }
}

/// Missing-value counts for one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NullCounts {
    pub rows: usize,
    pub address: usize,
    pub city: usize,
    pub state: usize,
    pub zip: usize,
    /// Rows missing both city and state.
    pub city_and_state: usize,
    /// Rows whose full address cannot be built.
    pub full_address: usize,
}

impl NullCounts {
    pub fn get(&self, field: AddressField) -> usize {
        match field {
            AddressField::Address => self.address,
            AddressField::City => self.city,
            AddressField::State => self.state,
            AddressField::Zip => self.zip,
        }
    }
}

/// Exact vs case-insensitive address-only match counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaseCheck {
    pub exact: usize,
    pub case_insensitive: usize,
}

impl CaseCheck {
    /// Extra matches gained by ignoring case. Non-zero means casing defects exist.
    pub fn gain(&self) -> usize {
        self.case_insensitive.saturating_sub(self.exact)
    }
}

/// Rows where every field but `field` matches the clean table and the full
/// four-field tuple does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDiscrepancy {
    pub field: AddressField,
    /// Rows matching clean on all fields except `field`.
    pub others_match: usize,
    /// Rows matching clean on all four fields.
    pub all_match: usize,
    /// Row positions in the test table, ascending.
    pub row_indices: Vec<usize>,
    /// The discrepancy rows, aligned with `row_indices`.
    pub rows: Vec<AddressRecord>,
}

impl FieldDiscrepancy {
    pub fn count(&self) -> usize {
        self.row_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_indices.is_empty()
    }
}
