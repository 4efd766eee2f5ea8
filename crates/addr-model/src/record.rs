//! Typed view of one address row.

use serde::{Deserialize, Serialize};

use crate::AddressField;

/// Builds the comparable full-address string: `"{address}, {city}, {state} {zip}"`.
///
/// # Examples
///
/// ```
/// use addr_model::format_full_address;
///
/// assert_eq!(
///     format_full_address("3640 Oak Creek Dr", "Seattle", "WA", "98102"),
///     "3640 Oak Creek Dr, Seattle, WA 98102"
/// );
/// ```
pub fn format_full_address(address: &str, city: &str, state: &str, zip: &str) -> String {
    format!("{address}, {city}, {state} {zip}")
}

/// A single address row. Missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl AddressRecord {
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            address: Some(address.into()),
            city: Some(city.into()),
            state: Some(state.into()),
            zip: Some(zip.into()),
        }
    }

    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Address => self.address.as_deref(),
            AddressField::City => self.city.as_deref(),
            AddressField::State => self.state.as_deref(),
            AddressField::Zip => self.zip.as_deref(),
        }
    }

    /// The full-address string, or `None` when any of the four fields is missing.
    ///
    /// A missing part makes the whole string missing, so such rows never
    /// count as a full-address match.
    pub fn full_address(&self) -> Option<String> {
        Some(format_full_address(
            self.address.as_deref()?,
            self.city.as_deref()?,
            self.state.as_deref()?,
            self.zip.as_deref()?,
        ))
    }

    /// Values of `fields` in the given order, or `None` if any is missing.
    pub fn project(&self, fields: &[AddressField]) -> Option<Vec<&str>> {
        fields.iter().map(|field| self.get(*field)).collect()
    }
}
