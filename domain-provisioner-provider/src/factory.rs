//! Provider factory functions.

use std::sync::Arc;

use crate::providers::{AcmProvider, Route53Provider};
use crate::traits::{CertificateProvider, ZoneProvider};
use crate::types::AwsCredentials;

/// Both AWS clients the provisioner needs, as shareable trait objects.
#[derive(Clone)]
pub struct AwsProviders {
    pub zones: Arc<dyn ZoneProvider>,
    pub certificates: Arc<dyn CertificateProvider>,
}

/// Creates the Route53 and ACM providers from one set of credentials.
///
/// Each request is attempted once. Use [`create_providers_with_retries`] to
/// retry transient failures.
///
/// # Examples
///
/// ```rust,no_run
/// use domain_provisioner_provider::{create_providers, AwsCredentials};
///
/// let providers = create_providers(&AwsCredentials::new("AKIA...", "secret"));
/// assert_eq!(providers.zones.id(), "route53");
/// ```
pub fn create_providers(credentials: &AwsCredentials) -> AwsProviders {
    create_providers_with_retries(credentials, 0)
}

/// Like [`create_providers`], retrying transient errors up to `max_retries` times.
pub fn create_providers_with_retries(
    credentials: &AwsCredentials,
    max_retries: u32,
) -> AwsProviders {
    AwsProviders {
        zones: Arc::new(
            Route53Provider::builder(credentials.clone())
                .max_retries(max_retries)
                .build(),
        ),
        certificates: Arc::new(
            AcmProvider::builder(credentials.clone())
                .max_retries(max_retries)
                .build(),
        ),
    }
}
