//! Missing-value profiling over loaded address records.

use addr_model::{AddressField, AddressRecord, NullCounts};

/// Count missing values per field, plus rows missing both city and state and
/// rows whose full address cannot be built.
pub fn null_counts(records: &[AddressRecord]) -> NullCounts {
    let mut counts = NullCounts {
        rows: records.len(),
        ..NullCounts::default()
    };
    for record in records {
        for field in AddressField::ALL {
            if record.get(field).is_some() {
                continue;
            }
            match field {
                AddressField::Address => counts.address += 1,
                AddressField::City => counts.city += 1,
                AddressField::State => counts.state += 1,
                AddressField::Zip => counts.zip += 1,
            }
        }
        if record.city.is_none() && record.state.is_none() {
            counts.city_and_state += 1;
        }
        if record.full_address().is_none() {
            counts.full_address += 1;
        }
    }
    counts
}
