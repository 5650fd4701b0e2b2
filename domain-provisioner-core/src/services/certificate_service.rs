//! Certificate lookup, request and status

use std::sync::Arc;

use domain_provisioner_provider::{CertificateRequest, CertificateStatus, ValidationMethod};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{CertificateInfo, CertificateStatusReport};
use crate::utils::domain::{idempotency_token, normalize_domain, www_alias};

/// Certificate service
pub struct CertificateService {
    ctx: Arc<ServiceContext>,
}

impl CertificateService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Find a usable certificate whose primary name is exactly `domain`.
    ///
    /// Only `PENDING_VALIDATION`, `ISSUED` and `INACTIVE` certificates are
    /// considered. A certificate that merely lists `domain` as a SAN does
    /// not match.
    pub async fn find_certificate(&self, domain: &str) -> CoreResult<Option<CertificateInfo>> {
        let domain = normalize_domain(domain)?;

        let certificates = self
            .ctx
            .certificate_provider
            .list_certificates(&CertificateStatus::LOOKUP_STATES)
            .await
            .map_err(|source| CoreError::CertificateLookup {
                target: domain.clone(),
                source,
            })?;

        let Some(summary) = certificates
            .into_iter()
            .find(|c| c.domain_name.eq_ignore_ascii_case(&domain))
        else {
            return Ok(None);
        };

        self.get_certificate_info(&summary.arn).await.map(Some)
    }

    /// Return the existing certificate of `domain`, or request one covering
    /// `domain` and `www.domain` with DNS validation.
    pub async fn request_certificate(&self, domain: &str) -> CoreResult<CertificateInfo> {
        let domain = normalize_domain(domain)?;

        if let Some(existing) = self.find_certificate(&domain).await? {
            log::info!(
                "Certificate {} already exists for {domain} ({})",
                existing.arn,
                existing.status
            );
            return Ok(existing);
        }

        let request = CertificateRequest {
            domain_name: domain.clone(),
            subject_alternative_names: vec![www_alias(&domain)],
            validation_method: ValidationMethod::Dns,
            idempotency_token: Some(idempotency_token(&domain)),
        };

        let arn = self
            .ctx
            .certificate_provider
            .request_certificate(&request)
            .await
            .map_err(|source| CoreError::CertificateRequest {
                domain: domain.clone(),
                source,
            })?;

        log::info!("Requested certificate {arn} for {domain}");

        self.get_certificate_info(&arn).await
    }

    /// Current state of a certificate with its challenge records.
    pub async fn get_certificate_info(&self, arn: &str) -> CoreResult<CertificateInfo> {
        let detail = self
            .ctx
            .certificate_provider
            .describe_certificate(arn)
            .await
            .map_err(|source| CoreError::CertificateLookup {
                target: arn.to_string(),
                source,
            })?;

        Ok(CertificateInfo::from_detail(detail))
    }

    /// Poll a certificate. `is_validated` iff `ISSUED`.
    pub async fn check_certificate_status(&self, arn: &str) -> CoreResult<CertificateStatusReport> {
        self.get_certificate_info(arn).await.map(Into::into)
    }
}
