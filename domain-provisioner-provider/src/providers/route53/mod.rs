//! Route53 hosted zone provider

mod error;
mod http;
mod provider;
/// Route53 REST/XML request and response types.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;
use crate::providers::sigv4::SigningScope;
use crate::types::AwsCredentials;

/// Route53 API endpoint (global service).
pub(crate) const ROUTE53_ENDPOINT: &str = "https://route53.amazonaws.com";
/// API version path prefix.
pub(crate) const ROUTE53_API_VERSION: &str = "/2013-04-01";
/// Route53 is signed against `us-east-1`.
pub(crate) const ROUTE53_SCOPE: SigningScope<'static> = SigningScope {
    region: "us-east-1",
    service: "route53",
};

/// Route53 provider implementation.
///
/// Authenticates with AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use domain_provisioner_provider::{AwsCredentials, Route53Provider};
///
/// let provider = Route53Provider::new(AwsCredentials::new(
///     "your-access-key-id",
///     "your-secret-access-key",
/// ));
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) credentials: AwsCredentials,
    pub(crate) endpoint: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    credentials: AwsCredentials,
    endpoint: String,
    max_retries: u32,
}

impl Route53ProviderBuilder {
    fn new(credentials: AwsCredentials) -> Self {
        Self {
            credentials,
            endpoint: ROUTE53_ENDPOINT.to_string(),
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

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Route53Provider {
        Route53Provider {
            client: create_http_client(),
            credentials: self.credentials,
            endpoint: self.endpoint,
            max_retries: self.max_retries,
        }
    }
}

impl Route53Provider {
    /// Creates a provider that attempts each request once.
    pub fn new(credentials: AwsCredentials) -> Self {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: AwsCredentials) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(credentials)
    }
}
