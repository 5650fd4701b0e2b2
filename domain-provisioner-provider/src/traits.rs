use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    CertificateDetail, CertificateRequest, CertificateStatus, CertificateSummary, ChangeInfo,
    DnsRecord, HostedZone, RecordChange, ZoneSummary,
};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (`NoSuchHostedZone`, `ResourceNotFoundException`, ...).
    pub code: Option<String>,
    /// Original error message.
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information used when mapping an error (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Domain name (`ZoneAlreadyExists`).
    pub domain: Option<String>,
    /// Hosted zone id (`ZoneNotFound`).
    pub zone_id: Option<String>,
    /// Certificate ARN (`CertificateNotFound`).
    pub certificate_arn: Option<String>,
}

/// Maps raw API errors to [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback).
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS zone service (Route53 semantics).
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// List zones in name order, starting at `dns_name`.
    ///
    /// The first result is the zone named `dns_name` when it exists, otherwise
    /// the next zone in lexicographic order of reversed labels. Callers must
    /// compare names themselves.
    async fn list_zones_by_name(&self, dns_name: &str, max_items: u32) -> Result<Vec<ZoneSummary>>;

    /// Get a zone with its delegation set.
    async fn get_zone(&self, zone_id: &str) -> Result<HostedZone>;

    /// Create a public hosted zone.
    ///
    /// `caller_reference` must be unique per request; reusing one that already
    /// created a zone fails with `ZoneAlreadyExists`.
    async fn create_zone(&self, domain: &str, caller_reference: &str) -> Result<HostedZone>;

    /// Submit a change batch. The batch is applied atomically.
    async fn change_records(&self, zone_id: &str, changes: &[RecordChange]) -> Result<ChangeInfo>;

    /// Get the propagation state of a submitted change.
    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo>;

    /// Create-or-replace a single record set.
    async fn upsert_record(&self, zone_id: &str, record: &DnsRecord) -> Result<ChangeInfo> {
        self.change_records(zone_id, &[RecordChange::upsert(record.clone())])
            .await
    }

    /// Create-or-replace several record sets in one change batch.
    async fn upsert_records(&self, zone_id: &str, records: &[DnsRecord]) -> Result<ChangeInfo> {
        let changes: Vec<_> = records.iter().cloned().map(RecordChange::upsert).collect();
        self.change_records(zone_id, &changes).await
    }
}

/// Certificate authority service (ACM semantics).
#[async_trait]
pub trait CertificateProvider: Send + Sync {
    /// Provider identifier.
    fn id(&self) -> &'static str;

    /// List every certificate in one of `statuses`, following pagination.
    async fn list_certificates(
        &self,
        statuses: &[CertificateStatus],
    ) -> Result<Vec<CertificateSummary>>;

    /// Request a new certificate. Returns its ARN.
    async fn request_certificate(&self, req: &CertificateRequest) -> Result<String>;

    /// Describe a certificate, including its domain validation options.
    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail>;
}
