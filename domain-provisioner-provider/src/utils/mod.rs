//! Utility modules.

/// Timestamp helpers for signing and parsing.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
