//! Street-line normalization.
//!
//! - **street**: the street-line parser used by the pipeline. It removes unit
//!   designators and separates house numbers from street names in one pass,
//!   without splitting ordinal tokens such as `6th`.
//! - **rules**: the same rewrites as standalone pattern rules, one per step.
//!   Useful for tracing what each step does to a single value.
//! - **table**: applies the parser to the address column of a table.

pub mod rules;
pub mod street;
pub mod table;

pub use rules::{
    AddressRule, apply_rules, rejoin_ordinal_suffix, separate_house_number, strip_unit_designator,
    trace_rules,
};
pub use street::{LineEdits, Segment, StreetLine, normalize_street_line};
pub use table::{NormalizedTable, normalize_table};
