//! File service data objects.

use serde::{Deserialize, Serialize};

use crate::types::{DynamicData, KeyValue};

/// Configuration of a file service domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileServiceDomainConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_server_addresses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_suffixes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_server_ip_config: Vec<DynamicData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_server_config: Option<DynamicData>,
}

/// A file service domain and its state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileServiceDomain {
    pub uuid: String,
    pub config: Option<VsanFileServiceDomainConfig>,
}

/// Filter for file service domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileServiceDomainQuerySpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uuids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
}

/// Configuration of a file share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileShareConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_quota: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_policy: Option<DynamicData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permission: Vec<DynamicData>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<String>,
}

/// A file share and its runtime state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileShare {
    pub uuid: String,
    pub config: Option<VsanFileShareConfig>,
    pub runtime: Option<DynamicData>,
}

/// Filter and paging for file share queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileShareQuerySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uuids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// One page of file shares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileShareQueryResult {
    pub file_shares: Vec<VsanFileShare>,
    pub next_offset: Option<String>,
}

/// A downloadable file service appliance image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanFileServiceOvfSpec {
    pub version: String,
    pub update_time: Option<crate::time::DateTime>,
    pub task: Option<crate::mor::ManagedObjectReference>,
}
