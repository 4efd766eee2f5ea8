//! Configuration options for address reconciliation.

use serde::{Deserialize, Serialize};

use crate::AddressField;

/// Source column names for the four address fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            address: "address".to_string(),
            city: "city".to_string(),
            state: "state".to_string(),
            zip: "zip".to_string(),
        }
    }
}

impl ColumnNames {
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Address => &self.address,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Zip => &self.zip,
        }
    }
}

/// Which street-line rewrites the normalizer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// Remove `", Unit <digits>"` designators.
    pub strip_units: bool,
    /// Separate a house number from a glued-on street name (`9690Canon` -> `9690 Canon`).
    /// Ordinal tokens such as `6th` and `2nd` are kept whole.
    pub separate_numbers: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            strip_units: true,
            separate_numbers: true,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strip_units(mut self, enable: bool) -> Self {
        self.strip_units = enable;
        self
    }

    pub fn with_separate_numbers(mut self, enable: bool) -> Self {
        self.separate_numbers = enable;
        self
    }

    /// True when no rewrite is enabled.
    pub fn is_noop(&self) -> bool {
        !self.strip_units && !self.separate_numbers
    }
}

/// Options controlling a full reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileOptions {
    pub columns: ColumnNames,
    pub normalization: NormalizationOptions,
    /// Field delimiter of both input files.
    pub delimiter: u8,
    /// Maximum number of rows printed per discrepancy subset.
    pub show_rows: usize,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            normalization: NormalizationOptions::default(),
            delimiter: b',',
            show_rows: 10,
        }
    }
}
