//! AWS Certificate Manager provider

mod error;
mod http;
mod provider;
/// ACM JSON request and response types.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::providers::sigv4::SigningScope;
use crate::types::AwsCredentials;

/// Certificates attached to CloudFront must live in `us-east-1`.
pub(crate) const ACM_REGION: &str = "us-east-1";
/// ACM API endpoint.
pub(crate) const ACM_ENDPOINT: &str = "https://acm.us-east-1.amazonaws.com";
pub(crate) const ACM_SCOPE: SigningScope<'static> = SigningScope {
    region: ACM_REGION,
    service: "acm",
};
/// Page size of `ListCertificates`.
pub(crate) const MAX_PAGE_SIZE: u32 = 1000;

/// ACM provider implementation.
///
/// Authenticates with AWS Signature Version 4 and talks the JSON 1.1
/// protocol (`X-Amz-Target: CertificateManager.<Operation>`).
///
/// # Construction
///
/// ```rust,no_run
/// use domain_provisioner_provider::{AcmProvider, AwsCredentials};
///
/// let provider = AcmProvider::builder(AwsCredentials::new(
///     "your-access-key-id",
///     "your-secret-access-key",
/// ))
/// .max_retries(2)
/// .build();
/// ```
pub struct AcmProvider {
    pub(crate) client: Client,
    pub(crate) credentials: AwsCredentials,
    pub(crate) endpoint: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`AcmProvider`].
pub struct AcmProviderBuilder {
    credentials: AwsCredentials,
    endpoint: String,
    max_retries: u32,
}

impl AcmProviderBuilder {
    fn new(credentials: AwsCredentials) -> Self {
        Self {
            credentials,
            endpoint: ACM_ENDPOINT.to_string(),
            max_retries: 0,
        }
    }

    /// Set the maximum number of automatic retries for transient errors (default: 0).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Send requests to another endpoint, such as a VPC endpoint or a local stub.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Sign requests with a temporary session token.
    pub fn session_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.session_token = Some(token.into());
        self
    }

    /// Build the [`AcmProvider`] instance.
    pub fn build(self) -> AcmProvider {
        AcmProvider {
            client: create_http_client(),
            credentials: self.credentials,
            endpoint: self.endpoint,
            max_retries: self.max_retries,
        }
    }
}

impl AcmProvider {
    /// Creates a provider that attempts each request once.
    pub fn new(credentials: AwsCredentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: AwsCredentials) -> AcmProviderBuilder {
        AcmProviderBuilder::new(credentials)
    }
}
