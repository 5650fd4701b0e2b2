//! ACM `CertificateProvider` implementation

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{CertificateProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    CertificateDetail, CertificateRequest, CertificateStatus, CertificateSummary, ChallengeRecord,
    DomainValidation,
};

use super::types::{
    CertificateJson, CertificateSummaryJson, DescribeCertificateRequest,
    DescribeCertificateResponse, ListCertificatesRequest, ListCertificatesResponse,
    RequestCertificateRequest, RequestCertificateResponse,
};
use super::{AcmProvider, MAX_PAGE_SIZE};

/// ACM idempotency tokens are limited to 32 `\w` characters.
const MAX_IDEMPOTENCY_TOKEN_LEN: usize = 32;
/// Safety bound on `ListCertificates` pagination.
const MAX_PAGES: usize = 100;

impl AcmProvider {
    fn status_of(raw: Option<&str>) -> CertificateStatus {
        raw.map_or_else(
            || CertificateStatus::Other(String::new()),
            CertificateStatus::parse,
        )
    }

    pub(crate) fn convert_summary(summary: CertificateSummaryJson) -> CertificateSummary {
        CertificateSummary {
            arn: summary.certificate_arn,
            domain_name: summary.domain_name,
            status: Self::status_of(summary.status.as_deref()),
        }
    }

    pub(crate) fn convert_detail(cert: CertificateJson) -> CertificateDetail {
        CertificateDetail {
            arn: cert.certificate_arn,
            domain_name: cert.domain_name,
            status: Self::status_of(cert.status.as_deref()),
            subject_alternative_names: cert.subject_alternative_names,
            domain_validation_options: cert
                .domain_validation_options
                .into_iter()
                .map(|o| DomainValidation {
                    domain_name: o.domain_name,
                    validation_status: o.validation_status,
                    resource_record: o.resource_record.map(|r| ChallengeRecord {
                        name: r.name,
                        record_type: r.record_type,
                        value: r.value,
                    }),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl CertificateProvider for AcmProvider {
    fn id(&self) -> &'static str {
        "acm"
    }

    async fn list_certificates(
        &self,
        statuses: &[CertificateStatus],
    ) -> Result<Vec<CertificateSummary>> {
        let certificate_statuses: Vec<&str> =
            statuses.iter().map(CertificateStatus::as_str).collect();
        let mut certificates = Vec::new();
        let mut next_token: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let body = ListCertificatesRequest {
                certificate_statuses: certificate_statuses.clone(),
                next_token: next_token.as_deref(),
                max_items: MAX_PAGE_SIZE,
            };

            let response: ListCertificatesResponse = self
                .call("ListCertificates", &body, ErrorContext::default())
                .await?;

            certificates.extend(
                response
                    .certificate_summary_list
                    .into_iter()
                    .map(Self::convert_summary),
            );

            match response.next_token {
                Some(token) if !token.is_empty() => next_token = Some(token),
                _ => return Ok(certificates),
            }
        }

        log::warn!(
            "[acm] ListCertificates still paginating after {MAX_PAGES} pages, returning {} certificates",
            certificates.len()
        );
        Ok(certificates)
    }

    async fn request_certificate(&self, req: &CertificateRequest) -> Result<String> {
        if let Some(token) = &req.idempotency_token
            && (token.is_empty()
                || token.len() > MAX_IDEMPOTENCY_TOKEN_LEN
                || !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
        {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "idempotency_token".to_string(),
                detail: format!("must be 1..={MAX_IDEMPOTENCY_TOKEN_LEN} word characters"),
            });
        }

        let body = RequestCertificateRequest {
            domain_name: &req.domain_name,
            subject_alternative_names: req
                .subject_alternative_names
                .iter()
                .map(String::as_str)
                .collect(),
            validation_method: req.validation_method.as_str(),
            idempotency_token: req.idempotency_token.as_deref(),
        };

        let response: RequestCertificateResponse = self
            .call(
                "RequestCertificate",
                &body,
                ErrorContext {
                    domain: Some(req.domain_name.clone()),
                    ..Default::default()
                },
            )
            .await?;

        log::info!(
            "[acm] Requested certificate {} for {}",
            response.certificate_arn,
            req.domain_name
        );
        Ok(response.certificate_arn)
    }

    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail> {
        let response: DescribeCertificateResponse = self
            .call(
                "DescribeCertificate",
                &DescribeCertificateRequest {
                    certificate_arn: arn,
                },
                ErrorContext {
                    certificate_arn: Some(arn.to_string()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(Self::convert_detail(response.certificate))
    }
}
