//! ACM error mapping
//!
//! Reference: <https://docs.aws.amazon.com/acm/latest/APIReference/CommonErrors.html>

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::AcmProvider;

impl ProviderErrorMapper for AcmProvider {
    fn provider_name(&self) -> &'static str {
        "acm"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ Authentication ============
            Some(
                "UnrecognizedClientException"
                | "InvalidSignatureException"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredTokenException"
                | "InvalidClientTokenId",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Authorization ============
            Some("AccessDeniedException" | "AccessDenied") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Throttling ============
            Some("ThrottlingException" | "Throttling" | "RequestInProgressException") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ Certificates ============
            Some("ResourceNotFoundException") => ProviderError::CertificateNotFound {
                provider: self.provider_name().to_string(),
                arn: context.certificate_arn.unwrap_or_default(),
                raw_message: Some(raw.message),
            },
            Some("InvalidArnException") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "certificate_arn".to_string(),
                detail: raw.message,
            },
            Some("InvalidDomainValidationOptionsException") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "domain".to_string(),
                detail: raw.message,
            },
            Some(
                "InvalidParameterException" | "ValidationException" | "InvalidStateException",
            ) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "input".to_string(),
                detail: raw.message,
            },

            // ============ Quotas ============
            Some("LimitExceededException") => ProviderError::QuotaExceeded {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Fallback ============
            _ => self.unknown_error(raw),
        }
    }
}
