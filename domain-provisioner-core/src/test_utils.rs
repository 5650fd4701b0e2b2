//! Test helpers
//!
//! In-memory Route53 and ACM stand-ins plus factories for every service.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use domain_provisioner_provider::{
    CertificateDetail, CertificateProvider, CertificateRequest, CertificateStatus,
    CertificateSummary, ChallengeRecord, ChangeAction, ChangeInfo, ChangeStatus, DnsRecord,
    DnsRecordType, DomainValidation, HostedZone, ProviderError, RecordChange, Result,
    ZoneProvider, ZoneSummary,
};
use tokio::sync::RwLock;

use crate::services::{
    CertificateService, DnsRecordService, DomainSetupService, ServiceContext, ZoneService,
};

pub const TEST_CDN_DOMAIN: &str = "d111111abcdef8.cloudfront.net";

fn normalize(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Route53 orders zones by their labels read right to left.
fn reversed_labels(name: &str) -> String {
    normalize(name).rsplit('.').collect::<Vec<_>>().join(".")
}

fn current_failure(slot: &Mutex<Option<ProviderError>>) -> Option<ProviderError> {
    slot.lock().unwrap().clone()
}

// ===== MockZoneProvider =====

struct MockZone {
    id: String,
    name: String,
    nameservers: Vec<String>,
    records: Vec<DnsRecord>,
}

pub struct MockZoneProvider {
    zones: RwLock<Vec<MockZone>>,
    changes: RwLock<HashMap<String, ChangeStatus>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    get_zone_calls: AtomicUsize,
    create_calls: AtomicUsize,
    change_calls: AtomicUsize,
    list_error: Mutex<Option<ProviderError>>,
    create_error: Mutex<Option<ProviderError>>,
    change_error: Mutex<Option<ProviderError>>,
    failing_record: Mutex<Option<String>>,
}

impl MockZoneProvider {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(Vec::new()),
            changes: RwLock::new(HashMap::new()),
            next_id: AtomicUsize::new(1),
            list_calls: AtomicUsize::new(0),
            get_zone_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            change_calls: AtomicUsize::new(0),
            list_error: Mutex::new(None),
            create_error: Mutex::new(None),
            change_error: Mutex::new(None),
            failing_record: Mutex::new(None),
        }
    }

    fn next_id(&self) -> usize {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn add_zone(&self, domain: &str) -> HostedZone {
        let n = self.next_id();
        let zone = MockZone {
            id: format!("Z{n:04}MOCKZONE"),
            name: format!("{}.", normalize(domain)),
            nameservers: vec![
                format!("ns-{n}.awsdns-01.org"),
                format!("ns-{n}.awsdns-02.co.uk"),
                format!("ns-{n}.awsdns-03.com"),
                format!("ns-{n}.awsdns-04.net"),
            ],
            records: Vec::new(),
        };
        let hosted = HostedZone {
            id: zone.id.clone(),
            name: zone.name.clone(),
            nameservers: zone.nameservers.clone(),
            change: None,
        };
        self.zones.write().await.push(zone);
        hosted
    }

    async fn new_change(&self) -> ChangeInfo {
        let id = format!("C{:04}MOCKCHANGE", self.next_id());
        self.changes
            .write()
            .await
            .insert(id.clone(), ChangeStatus::Pending);
        ChangeInfo {
            id,
            status: ChangeStatus::Pending,
            submitted_at: Some(Utc::now()),
        }
    }

    /// Seed a zone without going through `create_zone`. Returns its id.
    pub async fn insert_zone(&self, domain: &str) -> String {
        self.add_zone(domain).await.id
    }

    pub async fn zone_id_of(&self, domain: &str) -> Option<String> {
        let name = normalize(domain);
        self.zones
            .read()
            .await
            .iter()
            .find(|z| normalize(&z.name) == name)
            .map(|z| z.id.clone())
    }

    pub async fn records(&self, zone_id: &str) -> Vec<DnsRecord> {
        self.zones
            .read()
            .await
            .iter()
            .find(|z| z.id == zone_id)
            .map(|z| z.records.clone())
            .unwrap_or_default()
    }

    pub async fn record(
        &self,
        zone_id: &str,
        name: &str,
        record_type: DnsRecordType,
    ) -> Option<DnsRecord> {
        let name = normalize(name);
        self.records(zone_id)
            .await
            .into_iter()
            .find(|r| normalize(&r.name) == name && r.record_type == record_type)
    }

    /// Mark every submitted change as propagated.
    pub async fn sync_changes(&self) {
        for status in self.changes.write().await.values_mut() {
            *status = ChangeStatus::Insync;
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_zone_calls(&self) -> usize {
        self.get_zone_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn change_calls(&self) -> usize {
        self.change_calls.load(Ordering::SeqCst)
    }

    pub fn fail_list_zones(&self, error: Option<ProviderError>) {
        *self.list_error.lock().unwrap() = error;
    }

    pub fn fail_create_zone(&self, error: Option<ProviderError>) {
        *self.create_error.lock().unwrap() = error;
    }

    pub fn fail_change_records(&self, error: Option<ProviderError>) {
        *self.change_error.lock().unwrap() = error;
    }

    /// Reject any change batch touching `name`.
    pub fn fail_record_named(&self, name: Option<&str>) {
        *self.failing_record.lock().unwrap() = name.map(normalize);
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn list_zones_by_name(&self, dns_name: &str, max_items: u32) -> Result<Vec<ZoneSummary>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = current_failure(&self.list_error) {
            return Err(e);
        }

        let start = reversed_labels(dns_name);
        let zones = self.zones.read().await;
        let mut listed: Vec<(String, ZoneSummary)> = zones
            .iter()
            .map(|z| {
                (
                    reversed_labels(&z.name),
                    ZoneSummary {
                        id: z.id.clone(),
                        name: z.name.clone(),
                        record_count: Some(z.records.len() as u64 + 2),
                    },
                )
            })
            .filter(|(key, _)| *key >= start)
            .collect();
        listed.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(listed
            .into_iter()
            .take(max_items as usize)
            .map(|(_, summary)| summary)
            .collect())
    }

    async fn get_zone(&self, zone_id: &str) -> Result<HostedZone> {
        self.get_zone_calls.fetch_add(1, Ordering::SeqCst);
        self.zones
            .read()
            .await
            .iter()
            .find(|z| z.id == zone_id)
            .map(|z| HostedZone {
                id: z.id.clone(),
                name: z.name.clone(),
                nameservers: z.nameservers.clone(),
                change: None,
            })
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: "route53".to_string(),
                zone: zone_id.to_string(),
                raw_message: None,
            })
    }

    async fn create_zone(&self, domain: &str, _caller_reference: &str) -> Result<HostedZone> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = current_failure(&self.create_error) {
            return Err(e);
        }

        let mut zone = self.add_zone(domain).await;
        zone.change = Some(self.new_change().await);
        Ok(zone)
    }

    async fn change_records(&self, zone_id: &str, changes: &[RecordChange]) -> Result<ChangeInfo> {
        self.change_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = current_failure(&self.change_error) {
            return Err(e);
        }

        let failing = self.failing_record.lock().unwrap().clone();
        {
            let mut zones = self.zones.write().await;
            let zone = zones.iter_mut().find(|z| z.id == zone_id).ok_or_else(|| {
                ProviderError::ZoneNotFound {
                    provider: "route53".to_string(),
                    zone: zone_id.to_string(),
                    raw_message: None,
                }
            })?;

            if let Some(name) = failing.filter(|name| {
                changes.iter().any(|c| normalize(&c.record.name) == *name)
            }) {
                return Err(ProviderError::InvalidParameter {
                    provider: "route53".to_string(),
                    param: "ChangeBatch".to_string(),
                    detail: format!("RRSet {name} rejected"),
                });
            }

            // Batches are atomic; nothing above has touched the zone yet
            for change in changes {
                let name = normalize(&change.record.name);
                let kind = change.record.record_type;
                zone.records
                    .retain(|r| !(normalize(&r.name) == name && r.record_type == kind));
                if change.action != ChangeAction::Delete {
                    zone.records.push(change.record.clone());
                }
            }
        }

        Ok(self.new_change().await)
    }

    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo> {
        let status = self
            .changes
            .read()
            .await
            .get(change_id)
            .copied()
            .ok_or_else(|| ProviderError::InvalidParameter {
                provider: "route53".to_string(),
                param: "Id".to_string(),
                detail: format!("No change with id {change_id}"),
            })?;
        Ok(ChangeInfo {
            id: change_id.to_string(),
            status,
            submitted_at: None,
        })
    }
}

// ===== MockCertificateProvider =====

pub struct MockCertificateProvider {
    certificates: RwLock<Vec<CertificateDetail>>,
    tokens: RwLock<HashMap<String, String>>,
    requests: RwLock<Vec<CertificateRequest>>,
    next_id: AtomicUsize,
    request_calls: AtomicUsize,
    generate_challenges: AtomicBool,
    challenge_type: Mutex<String>,
    list_error: Mutex<Option<ProviderError>>,
    request_error: Mutex<Option<ProviderError>>,
    describe_error: Mutex<Option<ProviderError>>,
}

impl MockCertificateProvider {
    pub fn new() -> Self {
        Self {
            certificates: RwLock::new(Vec::new()),
            tokens: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            request_calls: AtomicUsize::new(0),
            generate_challenges: AtomicBool::new(true),
            challenge_type: Mutex::new("CNAME".to_string()),
            list_error: Mutex::new(None),
            request_error: Mutex::new(None),
            describe_error: Mutex::new(None),
        }
    }

    fn next_arn(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("arn:aws:acm:us-east-1:123456789012:certificate/mock-{n:04}")
    }

    /// Seed a certificate with no challenge records. Returns its ARN.
    pub async fn insert_certificate(&self, domain: &str, status: CertificateStatus) -> String {
        let arn = self.next_arn();
        self.certificates.write().await.push(CertificateDetail {
            arn: arn.clone(),
            domain_name: domain.to_string(),
            status,
            subject_alternative_names: vec![domain.to_string()],
            domain_validation_options: vec![DomainValidation {
                domain_name: domain.to_string(),
                validation_status: None,
                resource_record: None,
            }],
        });
        arn
    }

    pub async fn set_status(&self, arn: &str, status: CertificateStatus) {
        if let Some(cert) = self
            .certificates
            .write()
            .await
            .iter_mut()
            .find(|c| c.arn == arn)
        {
            cert.status = status;
        }
    }

    pub async fn detail(&self, arn: &str) -> Option<CertificateDetail> {
        self.certificates
            .read()
            .await
            .iter()
            .find(|c| c.arn == arn)
            .cloned()
    }

    pub async fn requests(&self) -> Vec<CertificateRequest> {
        self.requests.read().await.clone()
    }

    pub fn request_calls(&self) -> usize {
        self.request_calls.load(Ordering::SeqCst)
    }

    /// When off, new certificates have no challenge records yet.
    pub fn set_generate_challenges(&self, enabled: bool) {
        self.generate_challenges.store(enabled, Ordering::SeqCst);
    }

    /// Record type of the challenges of new certificates.
    pub fn set_challenge_type(&self, record_type: &str) {
        *self.challenge_type.lock().unwrap() = record_type.to_string();
    }

    pub fn fail_list(&self, error: Option<ProviderError>) {
        *self.list_error.lock().unwrap() = error;
    }

    pub fn fail_request(&self, error: Option<ProviderError>) {
        *self.request_error.lock().unwrap() = error;
    }

    pub fn fail_describe(&self, error: Option<ProviderError>) {
        *self.describe_error.lock().unwrap() = error;
    }
}

#[async_trait]
impl CertificateProvider for MockCertificateProvider {
    fn id(&self) -> &'static str {
        "acm"
    }

    async fn list_certificates(
        &self,
        statuses: &[CertificateStatus],
    ) -> Result<Vec<CertificateSummary>> {
        if let Some(e) = current_failure(&self.list_error) {
            return Err(e);
        }

        Ok(self
            .certificates
            .read()
            .await
            .iter()
            .filter(|c| statuses.contains(&c.status))
            .map(|c| CertificateSummary {
                arn: c.arn.clone(),
                domain_name: c.domain_name.clone(),
                status: c.status.clone(),
            })
            .collect())
    }

    async fn request_certificate(&self, req: &CertificateRequest) -> Result<String> {
        self.request_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = current_failure(&self.request_error) {
            return Err(e);
        }
        self.requests.write().await.push(req.clone());

        if let Some(token) = &req.idempotency_token {
            if let Some(arn) = self.tokens.read().await.get(token) {
                return Ok(arn.clone());
            }
        }

        let arn = self.next_arn();
        let serial = self.next_id.load(Ordering::SeqCst);
        let generate = self.generate_challenges.load(Ordering::SeqCst);
        let challenge_type = self.challenge_type.lock().unwrap().clone();
        let names = std::iter::once(&req.domain_name).chain(&req.subject_alternative_names);
        let domain_validation_options = names
            .enumerate()
            .map(|(i, name)| DomainValidation {
                domain_name: name.clone(),
                validation_status: Some("PENDING_VALIDATION".to_string()),
                resource_record: generate.then(|| ChallengeRecord {
                    name: Some(format!("_{:x}.{name}.", serial * 7919 + i)),
                    record_type: Some(challenge_type.clone()),
                    value: Some(format!("_{:x}.acm-validations.aws.", serial * 104_729 + i)),
                }),
            })
            .collect();

        self.certificates.write().await.push(CertificateDetail {
            arn: arn.clone(),
            domain_name: req.domain_name.clone(),
            status: CertificateStatus::PendingValidation,
            subject_alternative_names: std::iter::once(req.domain_name.clone())
                .chain(req.subject_alternative_names.iter().cloned())
                .collect(),
            domain_validation_options,
        });
        if let Some(token) = &req.idempotency_token {
            self.tokens.write().await.insert(token.clone(), arn.clone());
        }

        Ok(arn)
    }

    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail> {
        if let Some(e) = current_failure(&self.describe_error) {
            return Err(e);
        }

        self.detail(arn)
            .await
            .ok_or_else(|| ProviderError::CertificateNotFound {
                provider: "acm".to_string(),
                arn: arn.to_string(),
                raw_message: None,
            })
    }
}

// ===== Factory helpers =====

/// Context over fresh mocks, with [`TEST_CDN_DOMAIN`] as the CDN.
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockZoneProvider>,
    Arc<MockCertificateProvider>,
) {
    let zones = Arc::new(MockZoneProvider::new());
    let certs = Arc::new(MockCertificateProvider::new());

    let ctx = Arc::new(ServiceContext::new(
        zones.clone(),
        certs.clone(),
        TEST_CDN_DOMAIN,
    ));

    (ctx, zones, certs)
}

pub fn test_zone_service() -> (
    ZoneService,
    Arc<MockZoneProvider>,
    Arc<MockCertificateProvider>,
) {
    let (ctx, zones, certs) = create_test_context();
    (ZoneService::new(ctx), zones, certs)
}

pub fn test_certificate_service() -> (CertificateService, Arc<MockCertificateProvider>) {
    let (ctx, _, certs) = create_test_context();
    (CertificateService::new(ctx), certs)
}

pub fn test_dns_record_service() -> (DnsRecordService, Arc<MockZoneProvider>) {
    let (ctx, zones, _) = create_test_context();
    (DnsRecordService::new(ctx), zones)
}

pub fn test_setup_service() -> (
    DomainSetupService,
    Arc<MockZoneProvider>,
    Arc<MockCertificateProvider>,
) {
    let (ctx, zones, certs) = create_test_context();
    (DomainSetupService::new(ctx), zones, certs)
}
