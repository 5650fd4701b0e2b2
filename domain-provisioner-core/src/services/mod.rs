//! Business logic service layer

mod certificate_service;
mod dns_record_service;
mod domain_setup_service;
mod zone_service;

pub use certificate_service::CertificateService;
pub use dns_record_service::DnsRecordService;
pub use domain_setup_service::DomainSetupService;
pub use zone_service::ZoneService;

use std::sync::Arc;

use domain_provisioner_provider::{
    CertificateProvider, ZoneProvider, create_providers_with_retries,
};

use crate::config::ProvisionerConfig;
use crate::utils::DomainLocks;

/// Service context: holds all dependencies.
///
/// Platform code builds it once, from configuration or with injected
/// providers, and shares it behind an `Arc`.
pub struct ServiceContext {
    /// DNS zone service (Route53)
    pub zone_provider: Arc<dyn ZoneProvider>,
    /// Certificate authority (ACM)
    pub certificate_provider: Arc<dyn CertificateProvider>,
    /// Public domain of the CDN distribution
    pub cdn_domain: String,
    /// Serializes setup runs for the same domain
    pub domain_locks: DomainLocks,
}

impl ServiceContext {
    /// Create a service context from explicit providers.
    #[must_use]
    pub fn new(
        zone_provider: Arc<dyn ZoneProvider>,
        certificate_provider: Arc<dyn CertificateProvider>,
        cdn_domain: impl Into<String>,
    ) -> Self {
        Self {
            zone_provider,
            certificate_provider,
            cdn_domain: cdn_domain.into(),
            domain_locks: DomainLocks::new(),
        }
    }

    /// Build the AWS clients from configuration.
    ///
    /// Blank fields are logged as warnings, not rejected: they surface later
    /// as provider authentication errors.
    #[must_use]
    pub fn from_config(config: &ProvisionerConfig) -> Self {
        for field in config.missing_fields() {
            log::warn!("Provisioner configuration is missing '{field}'");
        }

        let providers = create_providers_with_retries(&config.credentials, config.max_retries);
        Self::new(
            providers.zones,
            providers.certificates,
            config.cloudfront_domain.trim().to_string(),
        )
    }
}
