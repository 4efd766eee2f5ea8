pub mod error;
pub mod field;
pub mod matching;
pub mod options;
pub mod record;
pub mod table;

pub use error::{ReconcileError, Result};
pub use field::AddressField;
pub use matching::{CaseCheck, Coverage, FieldDiscrepancy, NullCounts};
pub use options::{ColumnNames, NormalizationOptions, ReconcileOptions};
pub use record::{AddressRecord, format_full_address};
pub use table::{AddressTable, ColumnProfile, FULL_ADDRESS_COLUMN, TableProfile};
