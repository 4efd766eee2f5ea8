//! CSV loading for address tables.
//!
//! Both input files are read with schema inference disabled, so every column
//! arrives as text and values such as `02134` keep their leading zeros. Zip
//! codes that were written out from a float column (`98102.0`) are then
//! retyped to plain text by [`normalize_zip_column`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use addr_common::strip_float_suffix;
use addr_model::{AddressField, AddressTable, ColumnNames, ReconcileError, ReconcileOptions, Result};

/// Options for loading one address table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    pub columns: ColumnNames,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            delimiter: b',',
        }
    }
}

impl LoadOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }
}

impl From<&ReconcileOptions> for LoadOptions {
    fn from(options: &ReconcileOptions) -> Self {
        Self {
            columns: options.columns.clone(),
            delimiter: options.delimiter,
        }
    }
}

/// Read a delimited file into a DataFrame with every column typed as text.
pub fn read_text_frame(path: &Path, delimiter: u8) -> Result<DataFrame> {
    if !path.exists() {
        return Err(ReconcileError::NotFound(path.to_path_buf()));
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_separator(delimiter))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))?
        .finish()?;
    Ok(df)
}

/// Load an address table and retype its zip column.
pub fn load_address_table(
    name: &str,
    path: &Path,
    options: &LoadOptions,
) -> Result<AddressTable> {
    let start = Instant::now();
    let data = read_text_frame(path, options.delimiter)?;
    debug!(
        table = name,
        columns = data.width(),
        "read {}",
        path.display()
    );
    let table = AddressTable::new(name, data, options.columns.clone())?;
    let table = normalize_zip_column(&table)?;
    info!(
        table = name,
        rows = table.height(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );
    Ok(table)
}

/// Return a copy of `table` whose zip values have the float `.0` artifact removed.
pub fn normalize_zip_column(table: &AddressTable) -> Result<AddressTable> {
    let zips = table.field_values(AddressField::Zip)?;
    let mut rewritten = 0usize;
    let normalized: Vec<Option<String>> = zips
        .into_iter()
        .map(|value| {
            value.map(|zip| {
                let stripped = strip_float_suffix(&zip);
                if stripped != zip {
                    rewritten += 1;
                }
                stripped.to_string()
            })
        })
        .collect();
    if rewritten > 0 {
        debug!(table = %table.name, rewritten, "retyped zip values");
    }
    table.with_field_values(AddressField::Zip, normalized)
}
