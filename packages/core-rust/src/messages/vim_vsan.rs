//! vSAN operations of the core vSphere API: the per-host `HostVsanSystem`
//! and the vCenter `VsanUpgradeSystem`. Both predate the vSAN management
//! endpoint and are served by `/sdk`.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, HostMaintenanceSpec, VsanHostDiskMapping};

crate::soap_messages! {
    /// Disks on the host and whether vSAN can claim them.
    QueryDisksForVsan => QueryDisksForVsanResponse {
        canonical_name?: Vec<String>,
    } -> Vec<DynamicData>;

    AddDisks_Task => AddDisks_TaskResponse {
        disk: Vec<DynamicData>,
    } -> ManagedObjectReference;

    InitializeDisks_Task => InitializeDisks_TaskResponse {
        mapping: Vec<VsanHostDiskMapping>,
    } -> ManagedObjectReference;

    RemoveDisk_Task => RemoveDisk_TaskResponse {
        disk: Vec<DynamicData>,
        maintenance_spec?: HostMaintenanceSpec,
        timeout?: i32,
    } -> ManagedObjectReference;

    RemoveDiskMapping_Task => RemoveDiskMapping_TaskResponse {
        mapping: Vec<VsanHostDiskMapping>,
        maintenance_spec?: HostMaintenanceSpec,
        timeout?: i32,
    } -> ManagedObjectReference;

    UnmountDiskMapping_Task => UnmountDiskMapping_TaskResponse {
        mapping: Vec<VsanHostDiskMapping>,
    } -> ManagedObjectReference;

    UpdateVsan_Task => UpdateVsan_TaskResponse {
        config: DynamicData,
    } -> ManagedObjectReference;

    QueryHostStatus => QueryHostStatusResponse {} -> DynamicData;

    /// Moves the host's vSAN data elsewhere ahead of maintenance.
    EvacuateVsanNode_Task => EvacuateVsanNode_TaskResponse {
        maintenance_spec: HostMaintenanceSpec,
        timeout: i32,
    } -> ManagedObjectReference;

    RecommissionVsanNode_Task => RecommissionVsanNode_TaskResponse {} -> ManagedObjectReference;

    PerformVsanUpgrade_Task => PerformVsanUpgrade_TaskResponse {
        cluster: ManagedObjectReference,
        perform_object_upgrade?: bool,
        downgrade_format?: bool,
        allow_reduced_redundancy?: bool,
        exclude_hosts?: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    PerformVsanUpgradePreflightCheck => PerformVsanUpgradePreflightCheckResponse {
        cluster: ManagedObjectReference,
        downgrade_format?: bool,
    } -> DynamicData;

    QueryVsanUpgradeStatus => QueryVsanUpgradeStatusResponse {
        cluster: ManagedObjectReference,
    } -> DynamicData;
}
