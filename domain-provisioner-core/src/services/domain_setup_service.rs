//! End-to-end custom-domain provisioning
//!
//! `setup_custom_domain` runs four phases in order: zone, certificate,
//! validation records, CDN aliases. Nothing is checkpointed; a failed run is
//! resumed by calling it again, since every phase looks up before creating.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{CertificateService, DnsRecordService, ServiceContext, ZoneService};
use crate::types::{
    CertificateInfo, CertificateStatusReport, DnsRecord, DnsRecordType, DomainSetupResult,
    DomainStatusReport, HostedZoneInfo, ZoneStatus,
};
use crate::utils::domain::{normalize_domain, www_alias};

/// TTL of every record written during setup (seconds).
pub const SETUP_RECORD_TTL: u32 = 300;

/// Domain setup service
pub struct DomainSetupService {
    ctx: Arc<ServiceContext>,
    zones: ZoneService,
    certificates: CertificateService,
    records: DnsRecordService,
}

impl DomainSetupService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            zones: ZoneService::new(Arc::clone(&ctx)),
            certificates: CertificateService::new(Arc::clone(&ctx)),
            records: DnsRecordService::new(Arc::clone(&ctx)),
            ctx,
        }
    }

    /// Provision `domain` behind `cdn_domain`.
    ///
    /// Holds the per-domain lock for the whole run. The returned status is
    /// the certificate status at the end of the call; issuance must be polled.
    pub async fn setup_custom_domain(
        &self,
        domain: &str,
        cdn_domain: &str,
    ) -> CoreResult<DomainSetupResult> {
        let domain = normalize_domain(domain)?;
        let cdn_domain = normalize_domain(cdn_domain)?;

        let _guard = self.ctx.domain_locks.lock(&domain).await;
        log::info!("[{domain}] Starting custom domain setup (cdn: {cdn_domain})");

        // 1. Zone
        let zone = self.zones.create_hosted_zone(&domain).await?;
        log::info!(
            "[{domain}] Zone phase done: {} ({} nameservers)",
            zone.zone_id,
            zone.nameservers.len()
        );

        // 2. Certificate
        let certificate = self.certificates.request_certificate(&domain).await?;
        log::info!(
            "[{domain}] Certificate phase done: {} ({})",
            certificate.arn,
            certificate.status
        );

        // 3. Validation records
        self.write_validation_records(&domain, &zone, &certificate).await?;

        // 4. CDN aliases
        for name in [domain.clone(), www_alias(&domain)] {
            let alias = DnsRecord::cname(name, cdn_domain.as_str(), SETUP_RECORD_TTL);
            self.records.create_dns_record(&zone.zone_id, &alias).await?;
        }
        log::info!("[{domain}] Alias phase done: {domain}, www.{domain} -> {cdn_domain}");

        Ok(DomainSetupResult {
            zone_id: zone.zone_id,
            nameservers: zone.nameservers,
            certificate_arn: certificate.arn,
            status: certificate.status,
        })
    }

    /// [`setup_custom_domain`](Self::setup_custom_domain) with the configured CDN domain.
    pub async fn setup_with_default_cdn(&self, domain: &str) -> CoreResult<DomainSetupResult> {
        let cdn_domain = self.ctx.cdn_domain.clone();
        self.setup_custom_domain(domain, &cdn_domain).await
    }

    async fn write_validation_records(
        &self,
        domain: &str,
        zone: &HostedZoneInfo,
        certificate: &CertificateInfo,
    ) -> CoreResult<()> {
        if certificate.validation_records.is_empty() {
            if certificate.is_pending_validation() {
                log::warn!(
                    "[{domain}] Certificate {} has no validation records yet",
                    certificate.arn
                );
                return Err(CoreError::MissingValidationRecords {
                    arn: certificate.arn.clone(),
                });
            }
            log::info!(
                "[{domain}] Certificate {} is {}, no validation records to write",
                certificate.arn,
                certificate.status
            );
            return Ok(());
        }

        // Every type is checked before the first write
        let mut records = Vec::with_capacity(certificate.validation_records.len());
        for challenge in &certificate.validation_records {
            let Some(record_type) = DnsRecordType::parse(&challenge.record_type) else {
                log::warn!(
                    "[{domain}] Validation record {} has unsupported type '{}'",
                    challenge.name,
                    challenge.record_type
                );
                return Err(CoreError::UnsupportedValidationRecord {
                    name: challenge.name.clone(),
                    record_type: challenge.record_type.clone(),
                });
            };
            records.push(DnsRecord::new(
                record_type,
                challenge.name.as_str(),
                challenge.value.as_str(),
                SETUP_RECORD_TTL,
            ));
        }

        // One change per record, in order; the first failure aborts the rest
        for record in &records {
            self.records.create_dns_record(&zone.zone_id, record).await?;
        }

        log::info!(
            "[{domain}] Validation phase done: {} records",
            certificate.validation_records.len()
        );
        Ok(())
    }

    /// Read-only progress report. Creates nothing and is safe before any setup.
    pub async fn get_domain_status(&self, domain: &str) -> CoreResult<DomainStatusReport> {
        let domain = normalize_domain(domain)?;

        let (zone, certificate) = futures::future::join(
            self.zones.get_hosted_zone(&domain),
            self.certificates.find_certificate(&domain),
        )
        .await;
        let zone = zone?;
        let certificate = certificate?;

        let is_ready = certificate
            .as_ref()
            .is_some_and(|c| c.status.is_issued());

        Ok(DomainStatusReport {
            hosted_zone_exists: zone.is_some(),
            nameservers: zone.map(|z| z.nameservers).unwrap_or_default(),
            certificate_arn: certificate.as_ref().map(|c| c.arn.clone()),
            certificate_status: certificate.map(|c| c.status),
            is_ready,
        })
    }

    /// Poll a certificate by ARN.
    pub async fn check_certificate_status(&self, arn: &str) -> CoreResult<CertificateStatusReport> {
        self.certificates.check_certificate_status(arn).await
    }

    /// Poll the propagation of a zone change returned by setup.
    pub async fn get_zone_change_status(&self, change_id: &str) -> CoreResult<ZoneStatus> {
        self.zones.get_zone_change_status(change_id).await
    }
}
