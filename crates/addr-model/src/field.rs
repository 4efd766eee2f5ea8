//! Address fields compared between the test and clean tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four comparable parts of a postal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressField {
    Address,
    City,
    State,
    Zip,
}

impl AddressField {
    /// All fields in full-address order.
    pub const ALL: [AddressField; 4] = [
        AddressField::Address,
        AddressField::City,
        AddressField::State,
        AddressField::Zip,
    ];

    /// Order in which field-isolation diagnostics are run and reported.
    pub const ISOLATION_ORDER: [AddressField; 4] = [
        AddressField::Zip,
        AddressField::City,
        AddressField::State,
        AddressField::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Address => "address",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::Zip => "zip",
        }
    }

    /// Every field except `self`, in full-address order.
    pub fn others(self) -> Vec<AddressField> {
        Self::ALL.into_iter().filter(|field| *field != self).collect()
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
