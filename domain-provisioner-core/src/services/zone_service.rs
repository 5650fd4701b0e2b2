//! Hosted zone lookup and creation

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{HostedZoneInfo, ZoneStatus};
use crate::utils::domain::{caller_reference, fqdn, normalize_domain};

/// Hosted zone service
pub struct ZoneService {
    ctx: Arc<ServiceContext>,
}

impl ZoneService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Find the zone named exactly `domain.`.
    ///
    /// Lookup failures are logged and reported as "no zone", so a later
    /// create call provisions again instead of failing.
    pub async fn get_hosted_zone(&self, domain: &str) -> CoreResult<Option<HostedZoneInfo>> {
        let domain = normalize_domain(domain)?;
        let expected = fqdn(&domain);

        let zones = match self.ctx.zone_provider.list_zones_by_name(&domain, 1).await {
            Ok(zones) => zones,
            Err(e) => {
                log::warn!("Hosted zone lookup for {domain} failed, treating as absent: {e}");
                return Ok(None);
            }
        };

        // The listing starts at the closest name, which may be another domain
        let Some(summary) = zones
            .into_iter()
            .find(|z| z.name.eq_ignore_ascii_case(&expected))
        else {
            log::debug!("No hosted zone named {expected}");
            return Ok(None);
        };

        match self.ctx.zone_provider.get_zone(&summary.id).await {
            Ok(zone) => Ok(Some(HostedZoneInfo {
                zone_id: zone.id,
                nameservers: zone.nameservers,
                status: ZoneStatus::Insync,
                change_id: None,
            })),
            Err(e) => {
                log::warn!(
                    "Fetching hosted zone {} for {domain} failed, treating as absent: {e}",
                    summary.id
                );
                Ok(None)
            }
        }
    }

    /// Return the existing zone of `domain`, or create it.
    pub async fn create_hosted_zone(&self, domain: &str) -> CoreResult<HostedZoneInfo> {
        let domain = normalize_domain(domain)?;

        if let Some(existing) = self.get_hosted_zone(&domain).await? {
            log::info!("Hosted zone {} already exists for {domain}", existing.zone_id);
            return Ok(existing);
        }

        let reference = caller_reference(&domain, Utc::now());
        let zone = self
            .ctx
            .zone_provider
            .create_zone(&domain, &reference)
            .await
            .map_err(|source| CoreError::ZoneCreation {
                domain: domain.clone(),
                source,
            })?;

        log::info!("Created hosted zone {} for {domain}", zone.id);

        Ok(HostedZoneInfo {
            zone_id: zone.id,
            nameservers: zone.nameservers,
            status: ZoneStatus::Pending,
            change_id: zone.change.map(|c| c.id),
        })
    }

    /// Propagation state of a zone change (for example the creation change).
    pub async fn get_zone_change_status(&self, change_id: &str) -> CoreResult<ZoneStatus> {
        let change = self.ctx.zone_provider.get_change(change_id).await?;
        Ok(change.status.into())
    }
}
