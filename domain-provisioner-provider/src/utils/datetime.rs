//! Timestamp helpers for AWS response parsing

use chrono::{DateTime, Utc};

/// Parse an ISO-8601 timestamp as sent by Route53 (`2017-03-10T01:36:41.958Z`).
///
/// Returns `None` for anything that is not RFC 3339.
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
