//! Address table wrapper around a Polars DataFrame.
//!
//! [`AddressTable`] pairs a loaded DataFrame with the names of its address
//! columns. Tables are treated as snapshots: every transformation returns a
//! new table and leaves the receiver untouched, so a pre-normalization table
//! can still be inspected after the normalized one exists.

use polars::prelude::*;
use serde::Serialize;

use addr_common::any_to_text;

use crate::{AddressField, AddressRecord, ColumnNames, ReconcileError, Result};

/// Name of the derived full-address column.
pub const FULL_ADDRESS_COLUMN: &str = "full_address";

/// Column name and type as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
}

/// Shape of a loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableProfile {
    pub name: String,
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
}

/// A loaded address table.
#[derive(Debug, Clone)]
pub struct AddressTable {
    /// Label used in logs and errors (e.g. "test", "clean").
    pub name: String,
    /// The table contents.
    pub data: DataFrame,
    /// Where each address field lives in `data`.
    pub columns: ColumnNames,
}

impl AddressTable {
    /// Wrap a DataFrame, checking that all four address columns exist.
    pub fn new(name: impl Into<String>, data: DataFrame, columns: ColumnNames) -> Result<Self> {
        let name = name.into();
        for field in AddressField::ALL {
            let column = columns.get(field);
            if data.column(column).is_err() {
                return Err(ReconcileError::MissingColumn {
                    table: name,
                    column: column.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            data,
            columns,
        })
    }

    /// Build a table directly from records using the default column names.
    pub fn from_records(name: impl Into<String>, records: &[AddressRecord]) -> Result<Self> {
        let columns = ColumnNames::default();
        let series: Vec<Column> = AddressField::ALL
            .into_iter()
            .map(|field| {
                let values: Vec<Option<String>> = records
                    .iter()
                    .map(|record| record.get(field).map(str::to_string))
                    .collect();
                Series::new(columns.get(field).into(), values).into_column()
            })
            .collect();
        let data = DataFrame::new(series)?;
        Self::new(name, data, columns)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Text values of one address field. Nulls and empty cells are `None`.
    pub fn field_values(&self, field: AddressField) -> Result<Vec<Option<String>>> {
        let column = self.data.column(self.columns.get(field))?;
        let mut values = Vec::with_capacity(self.height());
        for idx in 0..self.height() {
            values.push(any_to_text(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        Ok(values)
    }

    /// Typed records in row order.
    pub fn records(&self) -> Result<Vec<AddressRecord>> {
        let address = self.field_values(AddressField::Address)?;
        let city = self.field_values(AddressField::City)?;
        let state = self.field_values(AddressField::State)?;
        let zip = self.field_values(AddressField::Zip)?;
        Ok(address
            .into_iter()
            .zip(city)
            .zip(state)
            .zip(zip)
            .map(|(((address, city), state), zip)| AddressRecord {
                address,
                city,
                state,
                zip,
            })
            .collect())
    }

    /// Return a copy of this table with `field` replaced by `values`.
    pub fn with_field_values(
        &self,
        field: AddressField,
        values: Vec<Option<String>>,
    ) -> Result<Self> {
        let column = self.columns.get(field);
        if values.len() != self.height() {
            return Err(ReconcileError::LengthMismatch {
                table: self.name.clone(),
                column: column.to_string(),
                expected: self.height(),
                actual: values.len(),
            });
        }
        let mut data = self.data.clone();
        data.with_column(Series::new(column.into(), values))?;
        Ok(Self {
            name: self.name.clone(),
            data,
            columns: self.columns.clone(),
        })
    }

    /// Return a copy of this table with a derived [`FULL_ADDRESS_COLUMN`].
    ///
    /// Rows missing any of the four parts get a null full address. The column
    /// is for inspection and shows up in [`AddressTable::profile`]; matching
    /// builds the same string from [`AddressRecord::full_address`] and never
    /// reads it back.
    pub fn with_full_address(&self) -> Result<Self> {
        let values: Vec<Option<String>> = self
            .records()?
            .iter()
            .map(AddressRecord::full_address)
            .collect();
        let mut data = self.data.clone();
        data.with_column(Series::new(FULL_ADDRESS_COLUMN.into(), values))?;
        Ok(Self {
            name: self.name.clone(),
            data,
            columns: self.columns.clone(),
        })
    }

    /// Column names and types as loaded.
    pub fn profile(&self) -> TableProfile {
        let columns = self
            .data
            .get_column_names()
            .into_iter()
            .zip(self.data.dtypes())
            .map(|(name, dtype)| ColumnProfile {
                name: name.to_string(),
                dtype: dtype.to_string(),
            })
            .collect();
        TableProfile {
            name: self.name.clone(),
            rows: self.height(),
            columns,
        }
    }
}
