//! Route53 REST/XML wire types
//!
//! Responses are deserialized with `quick_xml::de`; element names are
//! PascalCase. Unknown elements (`CallerReference`, `Config`, `IsTruncated`,
//! ...) are ignored.

use serde::{Deserialize, Serialize};

/// Namespace carried by every Route53 request document.
pub(crate) const ROUTE53_XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

// ============ Responses ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostedZoneXml {
    pub id: String,
    pub name: String,
    pub resource_record_set_count: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HostedZonesXml {
    #[serde(rename = "HostedZone", default)]
    pub hosted_zone: Vec<HostedZoneXml>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHostedZonesByNameResponse {
    #[serde(default)]
    pub hosted_zones: HostedZonesXml,
}

#[derive(Debug, Default, Deserialize)]
pub struct NameServersXml {
    #[serde(rename = "NameServer", default)]
    pub name_server: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DelegationSetXml {
    #[serde(default)]
    pub name_servers: NameServersXml,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeInfoXml {
    pub id: String,
    pub status: String,
    pub submitted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetHostedZoneResponse {
    pub hosted_zone: HostedZoneXml,
    /// Absent for private zones.
    pub delegation_set: Option<DelegationSetXml>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHostedZoneResponse {
    pub hosted_zone: HostedZoneXml,
    pub change_info: ChangeInfoXml,
    pub delegation_set: Option<DelegationSetXml>,
}

/// Body of both `ChangeResourceRecordSets` and `GetChange`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeInfoResponse {
    pub change_info: ChangeInfoXml,
}

// ============ Errors ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// `<ErrorResponse><Error>...</Error></ErrorResponse>`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessagesXml {
    #[serde(rename = "Message", default)]
    pub message: Vec<String>,
}

/// `<InvalidChangeBatch><Messages><Message>...</Message></Messages></InvalidChangeBatch>`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvalidChangeBatchResponse {
    pub messages: MessagesXml,
}

// ============ Requests ============

#[derive(Debug, Serialize)]
#[serde(rename = "CreateHostedZoneRequest")]
pub struct CreateHostedZoneRequest<'a> {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "CallerReference")]
    pub caller_reference: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResourceRecordXml {
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ResourceRecordsXml {
    #[serde(rename = "ResourceRecord")]
    pub resource_record: Vec<ResourceRecordXml>,
}

#[derive(Debug, Serialize)]
pub struct ResourceRecordSetXml {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: &'static str,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    #[serde(rename = "ResourceRecords")]
    pub resource_records: ResourceRecordsXml,
}

#[derive(Debug, Serialize)]
pub struct ChangeXml {
    #[serde(rename = "Action")]
    pub action: &'static str,
    #[serde(rename = "ResourceRecordSet")]
    pub resource_record_set: ResourceRecordSetXml,
}

#[derive(Debug, Serialize)]
pub struct ChangesXml {
    #[serde(rename = "Change")]
    pub change: Vec<ChangeXml>,
}

#[derive(Debug, Serialize)]
pub struct ChangeBatchXml {
    #[serde(rename = "Changes")]
    pub changes: ChangesXml,
}

#[derive(Debug, Serialize)]
#[serde(rename = "ChangeResourceRecordSetsRequest")]
pub struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "ChangeBatch")]
    pub change_batch: ChangeBatchXml,
}
