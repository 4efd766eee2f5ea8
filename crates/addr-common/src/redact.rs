//! Redaction of row-level values in logs.
//!
//! Street addresses identify people. Row values only reach the logs when the
//! binary opts in with [`set_log_data`]; otherwise [`REDACTED_VALUE`] is
//! logged in their place.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enable or disable row-level values in logs.
pub fn set_log_data(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the input value when row-level logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}
