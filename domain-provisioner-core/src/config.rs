//! Provisioner configuration

use serde::{Deserialize, Serialize};

use crate::types::AwsCredentials;

/// Everything needed to build a [`ServiceContext`](crate::ServiceContext).
///
/// Read once at construction. Blank fields are not rejected here; they are
/// reported by [`missing_fields`](Self::missing_fields) and surface later as
/// provider authentication errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionerConfig {
    pub credentials: AwsCredentials,
    /// Public domain of the CloudFront distribution (`d111111abcdef8.cloudfront.net`).
    pub cloudfront_domain: String,
    /// Automatic retries of transient provider errors (0 = attempt once).
    #[serde(default)]
    pub max_retries: u32,
}

impl ProvisionerConfig {
    pub fn new(credentials: AwsCredentials, cloudfront_domain: impl Into<String>) -> Self {
        Self {
            credentials,
            cloudfront_domain: cloudfront_domain.into(),
            max_retries: 0,
        }
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credentials.access_key_id.trim().is_empty() {
            missing.push("access_key_id");
        }
        if self.credentials.secret_access_key.trim().is_empty() {
            missing.push("secret_access_key");
        }
        if self.cloudfront_domain.trim().is_empty() {
            missing.push("cloudfront_domain");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_config_has_no_missing_fields() {
        let config = ProvisionerConfig::new(
            AwsCredentials::new("AKIDEXAMPLE", "secret"),
            "d111111abcdef8.cloudfront.net",
        );
        assert!(config.missing_fields().is_empty());
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn blank_fields_are_listed() {
        let config = ProvisionerConfig::new(AwsCredentials::new("", "  "), "");
        assert_eq!(
            config.missing_fields(),
            ["access_key_id", "secret_access_key", "cloudfront_domain"]
        );
    }

    #[test]
    fn session_token_is_optional() {
        let config = ProvisionerConfig::new(AwsCredentials::new("a", "b"), "cdn.example.net");
        assert!(config.credentials.session_token.is_none());
        assert!(config.missing_fields().is_empty());
    }
}
