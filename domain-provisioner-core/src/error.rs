//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use domain_provisioner_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The domain name is malformed (empty, has a scheme or path, no dot, ...).
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// Hosted zone creation failed.
    #[error("Failed to create hosted zone: {source}")]
    ZoneCreation {
        domain: String,
        source: ProviderError,
    },

    /// Certificate request failed.
    #[error("Failed to request certificate: {source}")]
    CertificateRequest {
        domain: String,
        source: ProviderError,
    },

    /// Listing or describing certificates failed.
    #[error("Failed to look up certificate {target}: {source}")]
    CertificateLookup {
        /// Domain or ARN that was looked up.
        target: String,
        source: ProviderError,
    },

    /// A record upsert failed. Later records were not written.
    #[error("Failed to create DNS record {name}: {source}")]
    RecordWrite {
        zone_id: String,
        name: String,
        source: ProviderError,
    },

    /// The certificate is pending validation but has no challenge records yet.
    #[error("Certificate {arn} has no DNS validation records yet")]
    MissingValidationRecords { arn: String },

    /// A validation record has a type that cannot be written to the zone.
    #[error("Validation record {name} has unsupported type '{record_type}'")]
    UnsupportedValidationRecord { name: String, record_type: String },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (bad input, missing resource, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidDomain(_)
            | Self::MissingValidationRecords { .. }
            | Self::UnsupportedValidationRecord { .. } => true,
            Self::ZoneCreation { source, .. }
            | Self::CertificateRequest { source, .. }
            | Self::CertificateLookup { source, .. }
            | Self::RecordWrite { source, .. } => source.is_expected(),
            Self::Provider(e) => e.is_expected(),
        }
    }

    /// The underlying provider error, if any.
    #[must_use]
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::ZoneCreation { source, .. }
            | Self::CertificateRequest { source, .. }
            | Self::CertificateLookup { source, .. }
            | Self::RecordWrite { source, .. } => Some(source),
            Self::Provider(e) => Some(e),
            Self::InvalidDomain(_)
            | Self::MissingValidationRecords { .. }
            | Self::UnsupportedValidationRecord { .. } => None,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
