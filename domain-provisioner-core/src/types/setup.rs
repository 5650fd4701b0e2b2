use serde::{Deserialize, Serialize};

use domain_provisioner_provider::CertificateStatus;

/// Snapshot returned by `setup_custom_domain`. Completion must be polled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSetupResult {
    pub zone_id: String,
    /// Nameservers the registrar must delegate to.
    pub nameservers: Vec<String>,
    pub certificate_arn: String,
    /// Certificate status at the end of the call.
    pub status: CertificateStatus,
}

/// Read-only view of how far provisioning of a domain has progressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStatusReport {
    pub hosted_zone_exists: bool,
    pub nameservers: Vec<String>,
    pub certificate_arn: Option<String>,
    pub certificate_status: Option<CertificateStatus>,
    /// `true` iff a certificate exists and is `ISSUED`.
    pub is_ready: bool,
}
