//! Shared utilities for the address reconciliation workspace.
//!
//! Polars value helpers used by the loader and the record model, and the
//! row-value redaction switch shared by every crate that logs.

pub mod polars;
pub mod redact;

pub use polars::{any_to_string, any_to_text, format_numeric, strip_float_suffix};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
