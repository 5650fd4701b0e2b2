//! Route53 error mapping
//!
//! Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//!
//! Route53 reports every failure as an `<ErrorResponse>` (HTTP 4xx/5xx)
//! except `InvalidChangeBatch`, which has its own document. Throttling is
//! reported as HTTP 400 `Throttling`, not 429.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ Authentication ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken"
                | "InvalidSignatureException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Authorization ============
            Some("AccessDenied" | "AccessDeniedException" | "NotAuthorizedException") => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ Throttling ============
            // PriorRequestNotComplete: a change for this zone is still being applied
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ Zones ============
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context
                    .zone_id
                    .or(context.domain)
                    .unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("HostedZoneAlreadyExists" | "ConflictingDomainExists") => {
                ProviderError::ZoneAlreadyExists {
                    provider: self.provider_name().to_string(),
                    domain: context.domain.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ Quotas ============
            Some("TooManyHostedZones" | "LimitsExceeded" | "DelegationSetNotAvailable") => {
                ProviderError::QuotaExceeded {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ Invalid parameters ============
            Some("InvalidDomainName") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "domain".to_string(),
                detail: raw.message,
            },
            Some("InvalidChangeBatch") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "change_batch".to_string(),
                detail: raw.message,
            },
            Some("NoSuchChange") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "change_id".to_string(),
                detail: raw.message,
            },
            Some("InvalidInput" | "InvalidArgument" | "ValidationError") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "input".to_string(),
                    detail: raw.message,
                }
            }

            // ============ Fallback ============
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AwsCredentials;

    fn provider() -> Route53Provider {
        Route53Provider::new(AwsCredentials::new("ak", "sk"))
    }

    #[test]
    fn no_such_hosted_zone_uses_zone_id() {
        let ctx = ErrorContext {
            zone_id: Some("Z123".to_string()),
            ..Default::default()
        };
        let err = provider().map_error(
            RawApiError::with_code("NoSuchHostedZone", "No hosted zone found with ID: Z123"),
            ctx,
        );
        assert!(
            matches!(&err, ProviderError::ZoneNotFound { zone, .. } if zone == "Z123"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn signature_mismatch_is_invalid_credentials() {
        let err = provider().map_error(
            RawApiError::with_code("SignatureDoesNotMatch", "bad signature"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn throttling_is_retryable() {
        let err = provider().map_error(
            RawApiError::with_code("Throttling", "Rate exceeded"),
            ErrorContext::default(),
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn existing_zone_carries_domain() {
        let ctx = ErrorContext {
            domain: Some("example.com".to_string()),
            ..Default::default()
        };
        let err = provider().map_error(
            RawApiError::with_code("HostedZoneAlreadyExists", "exists"),
            ctx,
        );
        assert!(
            matches!(
                &err,
                ProviderError::ZoneAlreadyExists { domain, .. } if domain == "example.com"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn unknown_code_falls_back() {
        let err = provider().map_error(
            RawApiError::with_code("SomethingNew", "surprise"),
            ErrorContext::default(),
        );
        assert!(
            matches!(&err, ProviderError::Unknown { raw_code: Some(c), .. } if c == "SomethingNew"),
            "unexpected error: {err:?}"
        );
    }
}
