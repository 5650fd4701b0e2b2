//! Type definition module

mod certificate;
mod setup;
mod zone;

pub use certificate::{CertificateInfo, CertificateStatusReport, ValidationRecord};
pub use setup::{DomainSetupResult, DomainStatusReport};
pub use zone::{HostedZoneInfo, ZoneStatus};

// Re-export public types of the provider library
pub use domain_provisioner_provider::{
    AwsCredentials, CertificateDetail, CertificateStatus, ChangeInfo, ChangeStatus, DnsRecord,
    DnsRecordType,
};
