//! # domain-provisioner-provider
//!
//! Signed clients for the two AWS services behind custom-domain provisioning:
//! Route53 hosted zones and ACM certificates.
//!
//! | Provider | Trait | Protocol | Auth Method |
//! |----------|-------|----------|-------------|
//! | [Route53](https://aws.amazon.com/route53/) | [`ZoneProvider`] | REST/XML | SigV4 |
//! | [ACM](https://aws.amazon.com/certificate-manager/) | [`CertificateProvider`] | JSON 1.1 | SigV4 |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_provisioner_provider::{
//!     create_providers, AwsCredentials, CertificateStatus, DnsRecord,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let providers = create_providers(&AwsCredentials::new("AKIA...", "secret"));
//!
//!     // Exact-name check is left to the caller
//!     let zones = providers.zones.list_zones_by_name("example.com", 1).await?;
//!     if let Some(zone) = zones.iter().find(|z| z.name == "example.com.") {
//!         providers
//!             .zones
//!             .upsert_record(&zone.id, &DnsRecord::cname("www.example.com", "d1.cloudfront.net", 300))
//!             .await?;
//!     }
//!
//!     let certs = providers
//!         .certificates
//!         .list_certificates(&CertificateStatus::LOOKUP_STATES)
//!         .await?;
//!     println!("{} certificates", certs.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::InvalidCredentials`]: signature rejected or credentials expired
//! - [`ProviderError::ZoneNotFound`]: hosted zone does not exist
//! - [`ProviderError::RateLimited`]: API throttling (retryable)
//! - [`ProviderError::NetworkError`]: network connectivity issue (retryable)
//!
//! Transient errors are retried with exponential backoff only when a
//! provider is built with `max_retries > 0`.

mod error;
mod factory;
mod http_client;
mod providers;
#[cfg(test)]
mod test_utils;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{AwsProviders, create_providers, create_providers_with_retries};

// Re-export public traits (error mapping stays internal)
pub use traits::{CertificateProvider, ZoneProvider};

// Re-export types
pub use types::{
    AwsCredentials, CertificateDetail, CertificateRequest, CertificateStatus, CertificateSummary,
    ChallengeRecord, ChangeAction, ChangeInfo, ChangeStatus, DnsRecord, DnsRecordType,
    DomainValidation, HostedZone, RecordChange, ValidationMethod, ZoneSummary,
};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete providers
pub use providers::common::{normalize_domain_name, to_fqdn};
pub use providers::{AcmProvider, AcmProviderBuilder, Route53Provider, Route53ProviderBuilder};
