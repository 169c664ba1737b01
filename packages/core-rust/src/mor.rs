//! Managed object references and the well-known singletons of the vSAN service.
//!
//! A managed object reference names a server-side object by its type and its
//! identifier (`moid`). Every operation request targets exactly one of them
//! through its `_this` field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Reference to a server-side managed object.
///
/// Displays as `Type:value`, which is also the format accepted by [`FromStr`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ManagedObjectReference {
    /// Managed object type name (e.g. `ClusterComputeResource`).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Server-assigned identifier, unique within the type.
    pub value: String,
}

impl ManagedObjectReference {
    /// Creates a reference from a type name and an identifier.
    #[must_use]
    pub fn new(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a `ClusterComputeResource` reference.
    #[must_use]
    pub fn cluster(moid: impl Into<String>) -> Self {
        Self::new("ClusterComputeResource", moid)
    }

    /// Shorthand for a `HostSystem` reference.
    #[must_use]
    pub fn host(moid: impl Into<String>) -> Self {
        Self::new("HostSystem", moid)
    }

    /// Shorthand for a `Task` reference.
    #[must_use]
    pub fn task(moid: impl Into<String>) -> Self {
        Self::new("Task", moid)
    }

    /// Whether both the type and the identifier are set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.type_name.is_empty() && !self.value.is_empty()
    }
}

impl fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_name, self.value)
    }
}

impl FromStr for ManagedObjectReference {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((type_name, value)) if !type_name.is_empty() && !value.is_empty() => {
                Ok(Self::new(type_name, value))
            }
            _ => Err(ParseError::ManagedObjectReference(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Well-known references
// ---------------------------------------------------------------------------

/// Well-known singleton managed objects exposed by the vSAN management service.
///
/// These objects have fixed identifiers on every vCenter (or ESXi host, for
/// the host-side systems), so callers never need to discover them. The
/// vSphere singletons at the end are served by the `/sdk` endpoint rather
/// than the vSAN one.
pub mod well_known {
    use super::ManagedObjectReference;

    macro_rules! well_known_refs {
        (
            $(
                $(#[$meta:meta])*
                $fn_name:ident => ($type_name:literal, $value:literal)
            ),* $(,)?
        ) => {
            $(
                $(#[$meta])*
                #[must_use]
                pub fn $fn_name() -> ManagedObjectReference {
                    ManagedObjectReference::new($type_name, $value)
                }
            )*

            /// Every well-known reference, in declaration order.
            #[must_use]
            pub fn all() -> Vec<ManagedObjectReference> {
                vec![$($fn_name()),*]
            }
        };
    }

    well_known_refs! {
        /// Performance statistics manager.
        perf_manager => ("VsanPerformanceManager", "vsan-performance-manager"),
        /// vCenter-side cluster health system.
        cluster_health_system => ("VsanVcClusterHealthSystem", "vsan-cluster-health-system"),
        /// Cluster space reporting.
        space_report_system => ("VsanSpaceReportSystem", "vsan-cluster-space-report-system"),
        /// Cluster configuration.
        cluster_config_system => ("VsanVcClusterConfigSystem", "vsan-cluster-config-system"),
        /// Disk group management.
        disk_management_system => ("VimClusterVsanVcDiskManagementSystem", "vsan-disk-management-system"),
        /// Object inspection and policy management.
        object_system => ("VsanObjectSystem", "vsan-cluster-object-system"),
        /// Stretched cluster and witness management.
        stretched_cluster_system => ("VimClusterVsanVcStretchedClusterSystem", "vsan-stretched-cluster-system"),
        /// Update manager integration.
        vum_system => ("VsanVumSystem", "vsan-vum-system"),
        /// On-disk format upgrades.
        upgrade_system_ex => ("VsanUpgradeSystemEx", "vsan-upgrade-systemex"),
        /// Capability discovery.
        capability_system => ("VsanCapabilitySystem", "vsan-vc-capability-system"),
        /// iSCSI target service.
        iscsi_target_system => ("VsanIscsiTargetSystem", "vsan-cluster-iscsi-target-system"),
        /// File service.
        file_service_system => ("VsanFileServiceSystem", "vsan-cluster-file-service-system"),
        /// Standard-to-distributed switch migration.
        vds_system => ("VsanVdsSystem", "vsan-vds-system"),
        /// What-if resource checks.
        resource_check_system => ("VsanResourceCheckSystem", "vsan-vc-resource-check-system"),
        /// Cluster power actions.
        cluster_power_system => ("VsanClusterPowerSystem", "vsan-cluster-power-system"),
        /// Remote (HCI mesh) datastores.
        remote_datastore_system => ("VsanRemoteDatastoreSystem", "vsan-remote-datastore-system"),
        /// vCenter appliance bootstrap on vSAN.
        vcsa_deployer_system => ("VsanVcsaDeployerSystem", "vsan-vcsa-deployer-system"),
        /// Host-side extended vSAN system.
        system_ex => ("VsanSystemEx", "vsanSystemEx"),
        /// Host-side health system.
        host_health_system => ("HostVsanHealthSystem", "ha-vsan-health-system"),
        /// Legacy on-disk format upgrade system.
        vsan_upgrade_system => ("VsanUpgradeSystem", "vsan-upgrade-system"),
        /// Property collector of the vSAN endpoint, for vSAN-only properties.
        vsan_property_collector => ("PropertyCollector", "vsan-property-collector"),
        /// Session manager of the vSphere API.
        session_manager => ("SessionManager", "SessionManager"),
        /// Root object of the vSphere API.
        service_instance => ("ServiceInstance", "ServiceInstance"),
        /// Default property collector of the vSphere API.
        property_collector => ("PropertyCollector", "propertyCollector"),
        view_manager => ("ViewManager", "ViewManager"),
        /// vSphere performance manager, distinct from the vSAN [`perf_manager`].
        vim_perf_manager => ("PerformanceManager", "PerfMgr"),
        event_manager => ("EventManager", "EventManager"),
        task_manager => ("TaskManager", "TaskManager"),
        alarm_manager => ("AlarmManager", "AlarmManager"),
        file_manager => ("FileManager", "FileManager"),
        datastore_namespace_manager => ("DatastoreNamespaceManager", "DatastoreNamespaceManager"),
        search_index => ("SearchIndex", "SearchIndex"),
        authorization_manager => ("AuthorizationManager", "AuthorizationManager"),
        license_manager => ("LicenseManager", "LicenseManager"),
        /// Lives under the license manager; its id is fixed all the same.
        license_assignment_manager => ("LicenseAssignmentManager", "LicenseAssignmentManager"),
        extension_manager => ("ExtensionManager", "ExtensionManager"),
        custom_fields_manager => ("CustomFieldsManager", "CustomFieldsManager"),
        /// Advanced settings of vCenter.
        option_manager => ("OptionManager", "VpxSettings"),
        virtual_disk_manager => ("VirtualDiskManager", "virtualDiskManager"),
        vstorage_object_manager => ("VcenterVStorageObjectManager", "VStorageObjectManager"),
        ovf_manager => ("OvfManager", "OvfManager"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        let mor = ManagedObjectReference::cluster("domain-c7");
        assert_eq!(mor.to_string(), "ClusterComputeResource:domain-c7");
        let parsed: ManagedObjectReference = mor.to_string().parse().unwrap();
        assert_eq!(parsed, mor);
    }

    #[test]
    fn parse_keeps_colons_in_value() {
        let parsed: ManagedObjectReference = "Folder:group-d1:extra".parse().unwrap();
        assert_eq!(parsed.type_name, "Folder");
        assert_eq!(parsed.value, "group-d1:extra");
    }

    #[test]
    fn parse_rejects_missing_parts() {
        assert!("".parse::<ManagedObjectReference>().is_err());
        assert!("HostSystem".parse::<ManagedObjectReference>().is_err());
        assert!(":host-9".parse::<ManagedObjectReference>().is_err());
        assert!("HostSystem:".parse::<ManagedObjectReference>().is_err());
    }

    #[test]
    fn serializes_type_field_name() {
        let json = serde_json::to_value(ManagedObjectReference::host("host-12")).unwrap();
        assert_eq!(json["type"], "HostSystem");
        assert_eq!(json["value"], "host-12");
    }

    #[test]
    fn well_known_refs_are_distinct_and_set() {
        let all = well_known::all();
        assert_eq!(all.len(), 41);
        assert!(all.iter().all(ManagedObjectReference::is_set));
        let mut values: Vec<_> = all.iter().map(|m| m.value.clone()).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), all.len());
    }

    #[test]
    fn perf_manager_matches_service_identifier() {
        let perf = well_known::perf_manager();
        assert_eq!(perf.type_name, "VsanPerformanceManager");
        assert_eq!(perf.value, "vsan-performance-manager");
    }
}
