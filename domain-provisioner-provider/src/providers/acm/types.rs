//! ACM JSON 1.1 wire types

use serde::{Deserialize, Serialize};

// ============ ListCertificates ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificatesRequest<'a> {
    pub certificate_statuses: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
    pub max_items: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateSummaryJson {
    pub certificate_arn: String,
    #[serde(default)]
    pub domain_name: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificatesResponse {
    #[serde(default)]
    pub certificate_summary_list: Vec<CertificateSummaryJson>,
    pub next_token: Option<String>,
}

// ============ RequestCertificate ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestCertificateRequest<'a> {
    pub domain_name: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_alternative_names: Vec<&'a str>,
    pub validation_method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestCertificateResponse {
    pub certificate_arn: String,
}

// ============ DescribeCertificate ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCertificateRequest<'a> {
    pub certificate_arn: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecordJson {
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub record_type: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainValidationJson {
    pub domain_name: String,
    pub validation_status: Option<String>,
    pub resource_record: Option<ResourceRecordJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateJson {
    pub certificate_arn: String,
    #[serde(default)]
    pub domain_name: String,
    pub status: Option<String>,
    #[serde(default)]
    pub subject_alternative_names: Vec<String>,
    #[serde(default)]
    pub domain_validation_options: Vec<DomainValidationJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCertificateResponse {
    pub certificate: CertificateJson,
}

// ============ Errors ============

/// `{"__type": "...#ResourceNotFoundException", "message": "..."}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Error code without the service namespace prefix.
    pub fn code(&self) -> Option<&str> {
        self.error_type
            .as_deref()
            .map(|t| t.rsplit_once('#').map_or(t, |(_, code)| code))
    }
}
