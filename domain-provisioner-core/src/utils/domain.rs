//! Domain name helpers

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};

/// Route53 caller references are limited to 128 characters.
const MAX_CALLER_REFERENCE_LEN: usize = 128;
/// ACM idempotency tokens are limited to 32 word characters.
const IDEMPOTENCY_TOKEN_LEN: usize = 32;

/// Canonical form of a domain: trimmed, lowercase, no trailing dot.
///
/// `www.` is kept; connecting a subdomain is legitimate.
pub fn normalize_domain(raw: &str) -> CoreResult<String> {
    let domain = raw.trim().trim_end_matches('.').to_ascii_lowercase();

    if domain.is_empty() {
        return Err(CoreError::InvalidDomain("domain is empty".to_string()));
    }
    if domain.contains("://") || domain.contains('/') {
        return Err(CoreError::InvalidDomain(format!(
            "'{raw}' looks like a URL, expected a bare domain"
        )));
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidDomain(format!(
            "'{raw}' contains whitespace"
        )));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.contains("..") {
        return Err(CoreError::InvalidDomain(format!(
            "'{raw}' is not a fully qualified domain"
        )));
    }

    Ok(domain)
}

/// Trailing-dot form used by Route53 zone names.
pub fn fqdn(domain: &str) -> String {
    format!("{domain}.")
}

/// The `www` alias of a domain.
pub fn www_alias(domain: &str) -> String {
    format!("www.{domain}")
}

fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Unique caller reference for a zone creation: domain plus a millisecond timestamp.
pub fn caller_reference(domain: &str, now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis();
    let reference = format!("{domain}-{millis}");
    if reference.len() <= MAX_CALLER_REFERENCE_LEN {
        reference
    } else {
        format!("{}-{millis}", &sha256_hex(domain)[..IDEMPOTENCY_TOKEN_LEN])
    }
}

/// Stable certificate idempotency token: first 32 hex characters of SHA-256 of the domain.
pub fn idempotency_token(domain: &str) -> String {
    sha256_hex(domain)[..IDEMPOTENCY_TOKEN_LEN].to_string()
}
