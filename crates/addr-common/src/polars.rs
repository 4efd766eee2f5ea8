//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for turning Polars `AnyValue` cells
//! into the text form used for address comparison.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, formats floats without a trailing
/// fractional zero so that numeric zip codes read back as `98102`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use addr_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(98102)), "98102");
/// assert_eq!(any_to_string(AnyValue::Float64(98102.0)), "98102");
/// assert_eq!(any_to_string(AnyValue::String("Seattle")), "Seattle");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts an `AnyValue` to text, returning `None` for nulls and empty strings.
///
/// An empty cell is missing, the same way a CSV reader treats an empty field.
/// Whitespace-only cells are values and keep their whitespace.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.is_empty() { None } else { Some(s) }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use addr_common::format_numeric;
///
/// assert_eq!(format_numeric(98102.0), "98102");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Strips the `.0` artifact left behind when an integer code was stored as a
/// float and then written back out as text.
///
/// Only a digit run followed by exactly `.0` is rewritten; anything else is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use addr_common::strip_float_suffix;
///
/// assert_eq!(strip_float_suffix("98102.0"), "98102");
/// assert_eq!(strip_float_suffix("98102"), "98102");
/// assert_eq!(strip_float_suffix("98102-1234"), "98102-1234");
/// ```
pub fn strip_float_suffix(value: &str) -> &str {
    let trimmed = value.trim();
    match trimmed.strip_suffix(".0") {
        Some(head) if !head.is_empty() && head.bytes().all(|b| b.is_ascii_digit()) => head,
        _ => trimmed,
    }
}
