//! vSAN object data objects.

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, VsanObjectSpaceSummary};

/// Storage policy and health of one object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanObjectInformation {
    pub directory_name: Option<String>,
    pub vsan_object_uuid: Option<String>,
    pub vsan_health: Option<String>,
    pub policy_attributes: Vec<DynamicData>,
    pub spbm_profile_uuid: Option<String>,
    pub spbm_profile_generation_id: Option<String>,
    pub spbm_compliance_result: Option<DynamicData>,
}

/// Selects an object for information queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanObjectQuerySpec {
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spbm_profile_generation_id: Option<String>,
}

/// What an object belongs to: a VM, a namespace, a file share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanObjectIdentity {
    pub uuid: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub vm_instance_uuid: Option<String>,
    pub vm_ns_object_uuid: Option<String>,
    pub vm: Option<ManagedObjectReference>,
    pub description: Option<String>,
    pub spbm_profile_uuid: Option<String>,
}

/// Combined identity, health and space result of an object query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanObjectIdentityAndHealth {
    pub identities: Vec<VsanObjectIdentity>,
    pub health: Option<DynamicData>,
    pub space_summary: Vec<VsanObjectSpaceSummary>,
    pub raw_data: Option<String>,
}

/// Objects currently resyncing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanHostVsanObjectSyncQueryResult {
    pub total_objects_to_sync: Option<i64>,
    pub total_bytes_to_sync: Option<i64>,
    pub total_recovery_eta: Option<i64>,
    pub objects: Vec<DynamicData>,
    pub sync_object_summary: Option<DynamicData>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn identity_type_is_renamed() {
        let identity: VsanObjectIdentity = serde_json::from_value(json!({
            "uuid": "5078bd5c",
            "type": "vdisk",
            "vm": {"type": "VirtualMachine", "value": "vm-42"},
        }))
        .unwrap();
        assert_eq!(identity.object_type, "vdisk");
        assert_eq!(identity.vm.unwrap().value, "vm-42");
    }
}
