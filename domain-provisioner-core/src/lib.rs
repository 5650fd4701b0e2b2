//! Domain Provisioner Core Library
//!
//! Business logic for connecting a customer domain to a CDN distribution:
//! - Hosted zone lookup and creation (Zone Service)
//! - Certificate request and polling (Certificate Service)
//! - DNS record upserts (DNS Record Service)
//! - The end-to-end setup flow and status report (Domain Setup Service)
//!
//! Every step looks up before it creates, so a failed setup is resumed by
//! running it again. Providers are injected through [`ServiceContext`], which
//! keeps this crate independent of how the AWS clients are built.

pub mod config;
pub mod error;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ProvisionerConfig;
pub use error::{CoreError, CoreResult};
pub use services::{
    CertificateService, DnsRecordService, DomainSetupService, ServiceContext, ZoneService,
};
