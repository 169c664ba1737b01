//! Cluster configuration, disk management and stretched cluster data objects.

use serde::{Deserialize, Serialize};

use crate::mor::ManagedObjectReference;
use crate::types::DynamicData;

/// Effective vSAN configuration of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanConfigInfoEx {
    pub enabled: Option<bool>,
    pub default_config: Option<VsanClusterDefaultConfig>,
    pub data_efficiency_config: Option<VsanDataEfficiencyConfig>,
    pub resync_iops_limit_config: Option<DynamicData>,
    pub iscsi_config: Option<DynamicData>,
    pub data_encryption_config: Option<DynamicData>,
    pub extended_config: Option<DynamicData>,
    pub unmap_config: Option<DynamicData>,
    pub file_service_config: Option<DynamicData>,
}

/// Cluster-level defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanClusterDefaultConfig {
    pub uuid: Option<String>,
    pub auto_claim_storage: Option<bool>,
    pub checksum_enabled: Option<bool>,
}

/// Deduplication and compression switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanDataEfficiencyConfig {
    pub dedup_enabled: bool,
    pub compression_enabled: Option<bool>,
}

/// Reconfiguration request for a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanReconfigSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsan_cluster_config: Option<DynamicData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_efficiency_config: Option<VsanDataEfficiencyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_mapping_spec: Option<DynamicData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_domains_spec: Option<DynamicData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reduced_redundancy: Option<bool>,
}

/// A disk group on a host: one cache device and its capacity devices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanHostDiskMapping {
    pub ssd: DynamicData,
    pub non_ssd: Vec<DynamicData>,
}

/// A disk group with its state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanHostDiskMapInfoEx {
    pub mapping: VsanHostDiskMapping,
    pub is_mounted: bool,
    pub unlocked_encrypted: Option<bool>,
    pub is_all_flash: bool,
    pub is_data_efficiency: Option<bool>,
    pub encryption_info: Option<DynamicData>,
}

/// How a host's data is handled while it enters maintenance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostMaintenanceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsan_mode: Option<VsanHostDecommissionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Data evacuation mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanHostDecommissionMode {
    /// `evacuateAllData`, `ensureObjectAccessibility` or `noAction`.
    pub object_action: String,
}

/// Dedup/compression capacity state of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VsanDataEfficiencyCapacityState {
    pub logical_capacity: Option<i64>,
    pub logical_capacity_used: Option<i64>,
    pub physical_capacity: Option<i64>,
    pub physical_capacity_used: Option<i64>,
    pub dedup_metadata_size: Option<i64>,
    pub space_efficiency_metadata_size: Option<DynamicData>,
}

/// Fault domain pairing of a stretched cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VimClusterVsanFaultDomainsConfigSpec {
    pub fault_domains: Vec<VimClusterVsanFaultDomainSpec>,
    pub witness: Option<VimClusterVsanWitnessSpec>,
}

/// One fault domain and its hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VimClusterVsanFaultDomainSpec {
    pub hosts: Vec<ManagedObjectReference>,
    pub name: String,
}

/// Witness host placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VimClusterVsanWitnessSpec {
    pub host: ManagedObjectReference,
    pub preferred_fault_domain_name: String,
}

/// The preferred fault domain of a stretched cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VimClusterVsanPreferredFaultDomainInfo {
    pub preferred_fault_domain_name: String,
    pub preferred_fault_domain_id: String,
}

/// A witness host of a stretched cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VimClusterVsanWitnessHostInfo {
    pub node_uuid: String,
    pub fault_domain_name: Option<String>,
    pub preferred_fd_name: Option<String>,
    pub preferred_fd_uuid: Option<String>,
    pub unicast_agent_addr: Option<String>,
    pub host: Option<ManagedObjectReference>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reconfig_spec_omits_unset_fields() {
        let spec = VsanReconfigSpec {
            modify: Some(true),
            data_efficiency_config: Some(VsanDataEfficiencyConfig {
                dedup_enabled: true,
                compression_enabled: Some(true),
            }),
            ..VsanReconfigSpec::default()
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "modify": true,
                "dataEfficiencyConfig": {"dedupEnabled": true, "compressionEnabled": true},
            })
        );
    }

    #[test]
    fn config_info_decodes_nested_defaults() {
        let info: VsanConfigInfoEx = serde_json::from_value(json!({
            "enabled": true,
            "defaultConfig": {"uuid": "52a4", "autoClaimStorage": false},
        }))
        .unwrap();
        assert_eq!(info.enabled, Some(true));
        let defaults = info.default_config.unwrap();
        assert_eq!(defaults.uuid.as_deref(), Some("52a4"));
        assert_eq!(defaults.auto_claim_storage, Some(false));
        assert!(info.data_efficiency_config.is_none());
    }
}
