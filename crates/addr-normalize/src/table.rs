//! Normalization of an address table's street column.

use std::time::Instant;

use tracing::{debug, info, trace};

use addr_common::redact_value;
use addr_model::{AddressField, AddressTable, NormalizationOptions, Result};

use crate::{LineEdits, StreetLine};

/// A normalized copy of a table and what changed.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub table: AddressTable,
    /// Positions of rows whose address text changed.
    pub changed_rows: Vec<usize>,
    /// Totals over all rows.
    pub edits: LineEdits,
}

impl NormalizedTable {
    pub fn changed(&self) -> usize {
        self.changed_rows.len()
    }
}

/// Return a copy of `table` with every street line normalized.
///
/// The input table is not modified. Missing addresses stay missing.
pub fn normalize_table(
    table: &AddressTable,
    options: &NormalizationOptions,
) -> Result<NormalizedTable> {
    let start = Instant::now();
    let addresses = table.field_values(AddressField::Address)?;
    let mut edits = LineEdits::default();
    let mut changed_rows = Vec::new();
    let mut normalized = Vec::with_capacity(addresses.len());
    for (idx, value) in addresses.into_iter().enumerate() {
        let Some(raw) = value else {
            normalized.push(None);
            continue;
        };
        let (line, line_edits) = StreetLine::parse(&raw, options).render(options);
        edits.units_removed += line_edits.units_removed;
        edits.numbers_separated += line_edits.numbers_separated;
        edits.ordinals_joined += line_edits.ordinals_joined;
        if line != raw {
            trace!(
                row = idx,
                before = redact_value(&raw),
                after = redact_value(&line),
                "address rewritten"
            );
            changed_rows.push(idx);
        }
        normalized.push(Some(line));
    }
    debug!(
        units_removed = edits.units_removed,
        numbers_separated = edits.numbers_separated,
        ordinals_joined = edits.ordinals_joined,
        "street line edits"
    );
    let table = table.with_field_values(AddressField::Address, normalized)?;
    info!(
        table = %table.name,
        changed = changed_rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "addresses normalized"
    );
    Ok(NormalizedTable {
        table,
        changed_rows,
        edits,
    })
}
