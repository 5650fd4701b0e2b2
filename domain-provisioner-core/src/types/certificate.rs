use serde::{Deserialize, Serialize};

use domain_provisioner_provider::{CertificateDetail, CertificateStatus};

/// A DNS challenge record the certificate authority expects to find.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub record_type: String,
}

/// A certificate with its current challenge records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateInfo {
    pub arn: String,
    pub status: CertificateStatus,
    pub domain_name: String,
    /// Empty until the authority has generated the challenges.
    pub validation_records: Vec<ValidationRecord>,
}

impl CertificateInfo {
    /// Build from a provider description.
    ///
    /// Options without a record, or whose record lacks a name or value, are
    /// skipped. Records shared by several names (apex and wildcard) are kept once.
    pub fn from_detail(detail: CertificateDetail) -> Self {
        let mut validation_records: Vec<ValidationRecord> = Vec::new();

        for option in detail.domain_validation_options {
            let Some(record) = option.resource_record else {
                continue;
            };
            let (Some(name), Some(value)) = (record.name, record.value) else {
                continue;
            };
            let record = ValidationRecord {
                name,
                value,
                record_type: record.record_type.unwrap_or_else(|| "CNAME".to_string()),
            };
            if !validation_records
                .iter()
                .any(|r| r.name == record.name && r.record_type == record.record_type)
            {
                validation_records.push(record);
            }
        }

        Self {
            arn: detail.arn,
            status: detail.status,
            domain_name: detail.domain_name,
            validation_records,
        }
    }

    pub fn is_pending_validation(&self) -> bool {
        self.status == CertificateStatus::PendingValidation
    }
}

/// Result of polling a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateStatusReport {
    pub status: CertificateStatus,
    /// `true` iff the status is `ISSUED`.
    pub is_validated: bool,
    pub validation_records: Vec<ValidationRecord>,
}

impl From<CertificateInfo> for CertificateStatusReport {
    fn from(info: CertificateInfo) -> Self {
        Self {
            is_validated: info.status.is_issued(),
            status: info.status,
            validation_records: info.validation_records,
        }
    }
}
