//! Route53 `ZoneProvider` implementation

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{strip_resource_prefix, to_fqdn};
use crate::traits::{ErrorContext, ProviderErrorMapper, ZoneProvider};
use crate::types::{
    ChangeInfo, ChangeStatus, DnsRecord, DnsRecordType, HostedZone, RecordChange, ZoneSummary,
};
use crate::utils::datetime::parse_iso8601;

use super::Route53Provider;
use super::types::{
    ChangeBatchXml, ChangeInfoResponse, ChangeInfoXml, ChangeResourceRecordSetsRequest, ChangeXml,
    ChangesXml, CreateHostedZoneRequest, CreateHostedZoneResponse, DelegationSetXml,
    GetHostedZoneResponse, HostedZoneXml, ListHostedZonesByNameResponse, ROUTE53_XMLNS,
    ResourceRecordSetXml, ResourceRecordXml, ResourceRecordsXml,
};

/// Route53 rejects caller references longer than this.
const MAX_CALLER_REFERENCE_LEN: usize = 128;
/// Upper bound of `maxitems` for `ListHostedZonesByName`.
const MAX_LIST_ITEMS: u32 = 100;

impl Route53Provider {
    pub(crate) fn convert_zone_summary(zone: HostedZoneXml) -> ZoneSummary {
        ZoneSummary {
            id: strip_resource_prefix(&zone.id, "/hostedzone/").to_string(),
            name: zone.name,
            record_count: zone.resource_record_set_count,
        }
    }

    pub(crate) fn convert_change_info(change: ChangeInfoXml) -> ChangeInfo {
        ChangeInfo {
            id: strip_resource_prefix(&change.id, "/change/").to_string(),
            status: ChangeStatus::parse(&change.status),
            submitted_at: change.submitted_at.as_deref().and_then(parse_iso8601),
        }
    }

    fn convert_hosted_zone(
        zone: HostedZoneXml,
        delegation_set: Option<DelegationSetXml>,
        change: Option<ChangeInfoXml>,
    ) -> HostedZone {
        let summary = Self::convert_zone_summary(zone);
        HostedZone {
            id: summary.id,
            name: summary.name,
            nameservers: delegation_set
                .map(|d| d.name_servers.name_server)
                .unwrap_or_default(),
            change: change.map(Self::convert_change_info),
        }
    }

    /// Wire value of a record. TXT data must be a quoted string.
    fn record_value(record: &DnsRecord) -> String {
        match record.record_type {
            DnsRecordType::Txt if !record.value.starts_with('"') => {
                format!("\"{}\"", record.value.replace('"', "\\\""))
            }
            _ => record.value.clone(),
        }
    }

    pub(crate) fn build_change_batch(changes: &[RecordChange]) -> ChangeResourceRecordSetsRequest {
        let change = changes
            .iter()
            .map(|c| ChangeXml {
                action: c.action.as_str(),
                resource_record_set: ResourceRecordSetXml {
                    name: to_fqdn(&c.record.name),
                    record_type: c.record.record_type.as_str(),
                    ttl: c.record.ttl,
                    resource_records: ResourceRecordsXml {
                        resource_record: vec![ResourceRecordXml {
                            value: Self::record_value(&c.record),
                        }],
                    },
                },
            })
            .collect();

        ChangeResourceRecordSetsRequest {
            xmlns: ROUTE53_XMLNS,
            change_batch: ChangeBatchXml {
                changes: ChangesXml { change },
            },
        }
    }
}

#[async_trait]
impl ZoneProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn list_zones_by_name(&self, dns_name: &str, max_items: u32) -> Result<Vec<ZoneSummary>> {
        let max_items = max_items.clamp(1, MAX_LIST_ITEMS);
        let query = format!(
            "dnsname={}&maxitems={max_items}",
            urlencoding::encode(dns_name)
        );

        let response: ListHostedZonesByNameResponse = self
            .get(
                "/hostedzonesbyname",
                &query,
                ErrorContext {
                    domain: Some(dns_name.to_string()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(response
            .hosted_zones
            .hosted_zone
            .into_iter()
            .map(Self::convert_zone_summary)
            .collect())
    }

    async fn get_zone(&self, zone_id: &str) -> Result<HostedZone> {
        let zone_id = strip_resource_prefix(zone_id, "/hostedzone/");
        let response: GetHostedZoneResponse = self
            .get(
                &format!("/hostedzone/{zone_id}"),
                "",
                ErrorContext {
                    zone_id: Some(zone_id.to_string()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(Self::convert_hosted_zone(
            response.hosted_zone,
            response.delegation_set,
            None,
        ))
    }

    async fn create_zone(&self, domain: &str, caller_reference: &str) -> Result<HostedZone> {
        if caller_reference.is_empty() || caller_reference.len() > MAX_CALLER_REFERENCE_LEN {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "caller_reference".to_string(),
                detail: format!("must be 1..={MAX_CALLER_REFERENCE_LEN} characters"),
            });
        }

        let body = CreateHostedZoneRequest {
            xmlns: ROUTE53_XMLNS,
            name: domain,
            caller_reference,
        };

        let response: CreateHostedZoneResponse = self
            .post(
                "/hostedzone",
                &body,
                ErrorContext {
                    domain: Some(domain.to_string()),
                    ..Default::default()
                },
            )
            .await?;

        let zone = Self::convert_hosted_zone(
            response.hosted_zone,
            response.delegation_set,
            Some(response.change_info),
        );
        log::info!(
            "[route53] Created hosted zone {} for {domain} ({} nameservers)",
            zone.id,
            zone.nameservers.len()
        );
        Ok(zone)
    }

    async fn change_records(&self, zone_id: &str, changes: &[RecordChange]) -> Result<ChangeInfo> {
        if changes.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "changes".to_string(),
                detail: "change batch must contain at least one change".to_string(),
            });
        }

        let zone_id = strip_resource_prefix(zone_id, "/hostedzone/");
        let body = Self::build_change_batch(changes);

        let response: ChangeInfoResponse = self
            .post(
                &format!("/hostedzone/{zone_id}/rrset/"),
                &body,
                ErrorContext {
                    zone_id: Some(zone_id.to_string()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(Self::convert_change_info(response.change_info))
    }

    async fn get_change(&self, change_id: &str) -> Result<ChangeInfo> {
        let change_id = strip_resource_prefix(change_id, "/change/");
        let response: ChangeInfoResponse = self
            .get(&format!("/change/{change_id}"), "", ErrorContext::default())
            .await?;

        Ok(Self::convert_change_info(response.change_info))
    }
}
