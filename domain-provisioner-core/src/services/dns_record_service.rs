//! DNS record upserts

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{ChangeInfo, DnsRecord};

/// DNS record service
pub struct DnsRecordService {
    ctx: Arc<ServiceContext>,
}

impl DnsRecordService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Upsert one record set. Writing the same `(name, type)` again replaces it.
    pub async fn create_dns_record(
        &self,
        zone_id: &str,
        record: &DnsRecord,
    ) -> CoreResult<ChangeInfo> {
        log::debug!(
            "Upserting {} {} -> {} (ttl {}) in {zone_id}",
            record.record_type,
            record.name,
            record.value,
            record.ttl
        );

        self.ctx
            .zone_provider
            .upsert_record(zone_id, record)
            .await
            .map_err(|source| CoreError::RecordWrite {
                zone_id: zone_id.to_string(),
                name: record.name.clone(),
                source,
            })
    }

    /// Upsert several record sets in one atomic change batch.
    ///
    /// An empty slice is a no-op and returns `None`.
    pub async fn create_dns_records(
        &self,
        zone_id: &str,
        records: &[DnsRecord],
    ) -> CoreResult<Option<ChangeInfo>> {
        if records.is_empty() {
            return Ok(None);
        }

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        log::debug!("Upserting {} records in {zone_id}: {names:?}", records.len());

        self.ctx
            .zone_provider
            .upsert_records(zone_id, records)
            .await
            .map(Some)
            .map_err(|source| CoreError::RecordWrite {
                zone_id: zone_id.to_string(),
                name: names.join(", "),
                source,
            })
    }
}
