//! Host-side data objects: CMMDS queries, host health and runtime information.

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

/// A CMMDS directory query. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostVsanInternalSystemCmmdsQuery {
    /// Entry type such as `HOSTNAME`, `DISK` or `DOM_OBJECT`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl HostVsanInternalSystemCmmdsQuery {
    /// Matches every entry of one type.
    #[must_use]
    pub fn of_type(entry_type: &str) -> Self {
        Self {
            entry_type: Some(entry_type.to_string()),
            ..Self::default()
        }
    }
}

/// Per-object result of an upgrade or delete on the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostVsanInternalSystemVsanObjectOperationResult {
    pub uuid: String,
    pub failure_reason: Vec<crate::types::LocalizableMessage>,
}

/// Whether a policy can be satisfied, and at what cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPolicySatisfiability {
    pub uuid: Option<String>,
    pub is_satisfiable: bool,
    pub reason: Option<crate::types::LocalizableMessage>,
    pub cost: Option<DynamicData>,
}

/// A policy change for an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanPolicyChangeBatch {
    pub uuid: Vec<String>,
    pub policy: Option<String>,
}

/// A new-object policy for provisioning checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanNewPolicyBatch {
    pub size: Vec<i64>,
    pub policy: Option<String>,
}

/// Host lookup result by node uuid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanQueryResultHostInfo {
    pub uuid: Option<String>,
    pub hostname_in_cmmds: Option<String>,
    pub vsan_ip_v4_addresses: Vec<String>,
}

/// Runtime counters of a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanHostRuntimeStats {
    pub resync_iops_limit: Option<i32>,
    pub config_generation: Option<DynamicData>,
    pub cluster_membership_state: Option<DynamicData>,
    pub component_limit_health: Option<DynamicData>,
}

/// Runtime counters keyed by host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanRuntimeStatsHostMap {
    pub host: ManagedObjectReference,
    pub stats: Option<VsanHostRuntimeStats>,
}

/// Version and build of the vSAN stack on a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanHostAboutInfoEx {
    pub name: String,
    pub version: String,
    pub build: String,
    pub chain_build: Option<String>,
    pub vsan_build: Option<String>,
}

/// Outcome of an evacuation what-if analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanWhatIfEvacResult {
    pub none: Option<DynamicData>,
    pub enable_accessibility: Option<DynamicData>,
    pub evacuate_all_data: Option<DynamicData>,
}

/// Repair outcome of immediate object repair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanRepairObjectsResult {
    pub in_queue_objects: Vec<String>,
    pub failed_repair_objects: Vec<DynamicData>,
    pub not_in_queue_objects: Vec<String>,
}

/// State of proactive rebalancing on a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanProactiveRebalanceInfoEx {
    pub running: Option<bool>,
    pub start_ts: Option<crate::time::DateTime>,
    pub stop_ts: Option<crate::time::DateTime>,
    pub variance_threshold: Option<f32>,
    pub time_threshold: Option<i32>,
    pub rate_threshold: Option<i32>,
    pub hostname: Option<String>,
    pub error: Option<DynamicData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmmds_query_serializes_type_only() {
        let value = serde_json::to_value(HostVsanInternalSystemCmmdsQuery::of_type("DISK")).unwrap();
        assert_eq!(value, serde_json::json!({"type": "DISK"}));
    }
}
