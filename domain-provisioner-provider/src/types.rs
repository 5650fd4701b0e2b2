use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Credentials ============

/// Static AWS credentials used to sign Route53 and ACM requests.
///
/// `Debug` never prints the secret key or the session token.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredentials {
    /// Access key id (`AKIA...` or `ASIA...`).
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token for temporary (STS) credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl AwsCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Whether both the access key id and the secret are present.
    pub fn is_complete(&self) -> bool {
        !self.access_key_id.trim().is_empty() && !self.secret_access_key.trim().is_empty()
    }
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

// ============ Zone Types ============

/// Propagation state of a Route53 change.
///
/// Both zone creation and record changes report `PENDING` until every
/// authoritative nameserver has the change, then `INSYNC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    /// Change submitted, not yet propagated.
    Pending,
    /// Change applied to all authoritative nameservers.
    Insync,
}

impl ChangeStatus {
    /// Parse the Route53 wire value. Anything other than `INSYNC` is pending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("INSYNC") {
            Self::Insync
        } else {
            Self::Pending
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Insync => "INSYNC",
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted Route53 change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Change id without the `/change/` prefix.
    pub id: String,
    pub status: ChangeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// A hosted zone as returned by name listing (no delegation set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSummary {
    /// Zone id without the `/hostedzone/` prefix.
    pub id: String,
    /// Fully qualified zone name, including the trailing dot (`example.com.`).
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
}

/// A hosted zone together with its authoritative nameservers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Zone id without the `/hostedzone/` prefix.
    pub id: String,
    /// Fully qualified zone name, including the trailing dot.
    pub name: String,
    /// Nameservers of the zone's delegation set, in provider order.
    pub nameservers: Vec<String>,
    /// Creation change, present only on the response to a create call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeInfo>,
}

// ============ Record Types ============

/// Resource record types this crate writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Txt,
    Mx,
    Ns,
    Caa,
}

impl DnsRecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Caa => "CAA",
        }
    }

    /// Parse a record type, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "AAAA" => Some(Self::Aaaa),
            "CNAME" => Some(Self::Cname),
            "TXT" => Some(Self::Txt),
            "MX" => Some(Self::Mx),
            "NS" => Some(Self::Ns),
            "CAA" => Some(Self::Caa),
            _ => None,
        }
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-value resource record set to write into a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    /// Fully qualified record name.
    pub name: String,
    pub value: String,
    /// TTL in seconds.
    pub ttl: u32,
}

impl DnsRecord {
    pub fn new(
        record_type: DnsRecordType,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            record_type,
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }

    /// CNAME `name -> target`.
    pub fn cname(name: impl Into<String>, target: impl Into<String>, ttl: u32) -> Self {
        Self::new(DnsRecordType::Cname, name, target, ttl)
    }
}

/// Route53 change action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Create,
    Delete,
    /// Create the record set, or replace it when `(name, type)` already exists.
    Upsert,
}

impl ChangeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Delete => "DELETE",
            Self::Upsert => "UPSERT",
        }
    }
}

/// One entry of a change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordChange {
    pub action: ChangeAction,
    pub record: DnsRecord,
}

impl RecordChange {
    pub fn upsert(record: DnsRecord) -> Self {
        Self {
            action: ChangeAction::Upsert,
            record,
        }
    }
}

// ============ Certificate Types ============

/// Lifecycle state of an ACM certificate.
///
/// Serialized as the ACM wire string. Unknown values are kept verbatim in
/// [`Other`](Self::Other) so new provider states never fail parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CertificateStatus {
    PendingValidation,
    Issued,
    Inactive,
    Expired,
    ValidationTimedOut,
    Revoked,
    Failed,
    Other(String),
}

impl CertificateStatus {
    /// States searched when looking for an existing certificate of a domain.
    pub const LOOKUP_STATES: [Self; 3] = [Self::PendingValidation, Self::Issued, Self::Inactive];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "PENDING_VALIDATION" => Self::PendingValidation,
            "ISSUED" => Self::Issued,
            "INACTIVE" => Self::Inactive,
            "EXPIRED" => Self::Expired,
            "VALIDATION_TIMED_OUT" => Self::ValidationTimedOut,
            "REVOKED" => Self::Revoked,
            "FAILED" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::PendingValidation => "PENDING_VALIDATION",
            Self::Issued => "ISSUED",
            Self::Inactive => "INACTIVE",
            Self::Expired => "EXPIRED",
            Self::ValidationTimedOut => "VALIDATION_TIMED_OUT",
            Self::Revoked => "REVOKED",
            Self::Failed => "FAILED",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_issued(&self) -> bool {
        matches!(self, Self::Issued)
    }
}

impl From<String> for CertificateStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<CertificateStatus> for String {
    fn from(status: CertificateStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How ownership of the certificate's names is proven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationMethod {
    Dns,
    Email,
}

impl ValidationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dns => "DNS",
            Self::Email => "EMAIL",
        }
    }
}

/// Certificate as returned by listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    pub arn: String,
    pub domain_name: String,
    pub status: CertificateStatus,
}

/// Parameters of a new certificate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    pub domain_name: String,
    pub subject_alternative_names: Vec<String>,
    pub validation_method: ValidationMethod,
    /// Collapses duplicate requests on the provider side (ACM: 1 hour window).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
}

/// The DNS challenge record for one validated name.
///
/// Every field is optional: a freshly requested certificate may not have
/// its challenge generated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRecord {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    pub value: Option<String>,
}

/// Validation state of one name on a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainValidation {
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_record: Option<ChallengeRecord>,
}

/// Full certificate description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetail {
    pub arn: String,
    pub domain_name: String,
    pub status: CertificateStatus,
    pub subject_alternative_names: Vec<String>,
    pub domain_validation_options: Vec<DomainValidation>,
}
