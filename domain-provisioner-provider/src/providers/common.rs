//! Helpers shared by the AWS clients

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the default timeouts.
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build HTTP client with timeouts, using defaults: {e}");
            Client::new()
        })
}

// ============ Domain names ============

/// Strip the trailing dot of a fully qualified name.
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Fully qualified form with exactly one trailing dot.
pub fn to_fqdn(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.'))
}

/// Strip an AWS resource prefix such as `/hostedzone/` or `/change/`.
pub fn strip_resource_prefix<'a>(id: &'a str, prefix: &str) -> &'a str {
    id.strip_prefix(prefix).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fqdn_has_single_trailing_dot() {
        assert_eq!(to_fqdn("example.com"), "example.com.");
        assert_eq!(to_fqdn("example.com."), "example.com.");
        assert_eq!(to_fqdn("example.com.."), "example.com.");
    }

    #[test]
    fn normalize_strips_trailing_dot() {
        assert_eq!(normalize_domain_name("example.com."), "example.com");
        assert_eq!(normalize_domain_name("example.com"), "example.com");
    }

    #[test]
    fn resource_prefix_stripped_when_present() {
        assert_eq!(
            strip_resource_prefix("/hostedzone/Z1D633PJN98FT9", "/hostedzone/"),
            "Z1D633PJN98FT9"
        );
        assert_eq!(strip_resource_prefix("Z1D633PJN98FT9", "/hostedzone/"), "Z1D633PJN98FT9");
        assert_eq!(strip_resource_prefix("/change/C2682N5HXP0BZ4", "/change/"), "C2682N5HXP0BZ4");
    }
}
