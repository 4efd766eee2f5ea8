//! Address matching against a clean reference table.
//!
//! Every comparison here is set membership: a test row matches when its
//! projected values appear on *some* clean row. Row positions never pair the
//! two tables. Comparisons are exact, so case and whitespace differences
//! count as mismatches.

pub mod index;
pub mod isolation;

pub use index::{ProjectionIndex, ReferenceIndex};
pub use isolation::{IsolationReport, isolate_all_fields, isolate_field};
