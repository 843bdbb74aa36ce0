//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Number of calendar days covered by every usage report, today included.
pub const REPORT_WINDOW_DAYS: usize = 7;

/// Milliseconds per minute, as a float for duration-to-minutes conversion.
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// chrono format string for chart day labels, e.g. "Mon 03 Jun".
pub const DAY_LABEL_FORMAT: &str = "%a %d %b";
