//! Log sanitization utilities
//!
//! Keeps validation challenge values, caller references and raw provider
//! bodies from being fully written to debug/error logs.

/// Maximum number of bytes kept in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for logging.
///
/// Strings within the limit are returned as-is; longer ones are cut at a
/// char boundary and suffixed with their total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask an access key id, keeping the first four characters.
pub fn mask_key_id(key_id: &str) -> String {
    let visible = floor_char_boundary(key_id, 4);
    format!("{}****", &key_id[..visible])
}
