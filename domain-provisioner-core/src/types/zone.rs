use serde::{Deserialize, Serialize};

use domain_provisioner_provider::ChangeStatus;

/// Propagation state of a hosted zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneStatus {
    /// Just created; nameservers may not answer yet.
    Pending,
    /// Served by every authoritative nameserver.
    Insync,
}

impl From<ChangeStatus> for ZoneStatus {
    fn from(status: ChangeStatus) -> Self {
        match status {
            ChangeStatus::Pending => Self::Pending,
            ChangeStatus::Insync => Self::Insync,
        }
    }
}

/// A hosted zone as seen by the provisioning workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZoneInfo {
    pub zone_id: String,
    pub nameservers: Vec<String>,
    pub status: ZoneStatus,
    /// Change id of the zone creation, present only for a zone created by this call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_id: Option<String>,
}
