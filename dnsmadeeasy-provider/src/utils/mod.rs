//! Utility modules.

/// Request date formatting for signed requests.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
