//! iSCSI target service data objects.

use serde::{Deserialize, Serialize};

use crate::types::DynamicData;

/// Creation or edit spec of an iSCSI target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanIscsiTargetSpec {
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iqn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_policy: Option<DynamicData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_spec: Option<VsanIscsiTargetAuthSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_alias: Option<String>,
}

/// CHAP authentication of a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanIscsiTargetAuthSpec {
    /// `NoAuth`, `CHAP` or `CHAP_Mutual`.
    pub auth_type: String,
    pub user_name_attach_to_target: Option<String>,
    pub user_secret_attach_to_target: Option<String>,
    pub user_name_attach_to_initiator: Option<String>,
    pub user_secret_attach_to_initiator: Option<String>,
}

/// An iSCSI target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanIscsiTarget {
    pub alias: String,
    pub iqn: Option<String>,
    pub auth_spec: Option<VsanIscsiTargetAuthSpec>,
    pub port: Option<i32>,
    pub network_interface: Option<String>,
    pub io_owner_host: Option<String>,
    pub namespace_uuid: Option<String>,
    pub lun_count: Option<i32>,
    pub initiator: Vec<String>,
}

/// Creation or edit spec of a LUN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanIscsiLunSpec {
    pub lun_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lun_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_policy: Option<DynamicData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_lun_id: Option<i32>,
}

/// A LUN exposed by a target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanIscsiLun {
    pub target_alias: String,
    pub lun_id: i32,
    pub lun_size: i64,
    pub alias: Option<String>,
    pub status: Option<String>,
    pub uuid: Option<String>,
    pub actual_size: Option<i64>,
}

/// A named group of initiators with access to targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanIscsiInitiatorGroup {
    pub name: String,
    pub initiators: Vec<String>,
    pub targets: Vec<String>,
}
