use serde::{Deserialize, Serialize};

/// Unified error type for all Route53 and ACM operations.
///
/// Each variant carries a `provider` field identifying which service produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): API throttling
///
/// The HTTP client only retries them when the provider was built with
/// `max_retries > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, HTTP 5xx).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API throttled the request (HTTP 429 or `Throttling*` error codes).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if the API sent one.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The credentials are missing, invalid, expired, or the signature did not match.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The credentials are valid but not allowed to perform the operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone does not exist.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone id or domain that was looked up.
        zone: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A hosted zone with the same name and caller reference already exists.
    ZoneAlreadyExists {
        /// Provider that produced the error.
        provider: String,
        /// Domain of the conflicting zone.
        domain: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The certificate does not exist.
    CertificateNotFound {
        /// Provider that produced the error.
        provider: String,
        /// ARN that was looked up.
        arn: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (bad domain name, invalid change batch, ...).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// An account limit was reached (zones per account, certificates per year, ...).
    ///
    /// Unlike [`RateLimited`](Self::RateLimited), this is not transient.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error is expected (bad input, missing resource, ...), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::ZoneAlreadyExists { .. }
                | Self::CertificateNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::QuotaExceeded { .. }
        )
    }

    /// Whether a retry of the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ZoneNotFound {
                provider,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Hosted zone '{zone}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Hosted zone '{zone}' not found")
                }
            }
            Self::ZoneAlreadyExists {
                provider, domain, ..
            } => {
                write!(f, "[{provider}] Hosted zone for '{domain}' already exists")
            }
            Self::CertificateNotFound { provider, arn, .. } => {
                write!(f, "[{provider}] Certificate '{arn}' not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::QuotaExceeded {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Quota exceeded: {msg}")
                } else {
                    write!(f, "[{provider}] Quota exceeded")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
