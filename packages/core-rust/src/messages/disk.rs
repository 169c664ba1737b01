//! Operations of `VimClusterVsanVcDiskManagementSystem`.

use crate::mor::ManagedObjectReference;
use crate::types::{
    DynamicData, HostMaintenanceSpec, VsanDataEfficiencyCapacityState, VsanHostDiskMapInfoEx,
    VsanHostDiskMapping,
};

crate::soap_messages! {
    /// Disk groups configured on a host.
    QueryDiskMappings => QueryDiskMappingsResponse {
        host: ManagedObjectReference,
    } -> Vec<VsanHostDiskMapInfoEx>;

    InitializeDiskMappings => InitializeDiskMappingsResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    /// Creates a disk group from one cache device and capacity devices.
    AddDisksToDiskGroup => AddDisksToDiskGroupResponse {
        host: ManagedObjectReference,
        mapping: VsanHostDiskMapping,
    } -> ManagedObjectReference;

    RemoveDiskMapping => RemoveDiskMappingResponse {
        host: ManagedObjectReference,
        mapping: Vec<VsanHostDiskMapping>,
        maintenance_spec?: HostMaintenanceSpec,
        timeout?: i32,
    } -> ManagedObjectReference;

    RemoveDisks => RemoveDisksResponse {
        host: ManagedObjectReference,
        disk: Vec<DynamicData>,
        maintenance_spec?: HostMaintenanceSpec,
        timeout?: i32,
    } -> ManagedObjectReference;

    UnmountDiskMapping => UnmountDiskMappingResponse {
        host: ManagedObjectReference,
        mapping: Vec<VsanHostDiskMapping>,
        maintenance_spec?: HostMaintenanceSpec,
        timeout?: i32,
    } -> ManagedObjectReference;

    RebuildDiskMapping => RebuildDiskMappingResponse {
        host: ManagedObjectReference,
        mapping: VsanHostDiskMapping,
        maintenance_spec: HostMaintenanceSpec,
    } -> ManagedObjectReference;

    /// Logical and physical capacity figures of deduplicated disk groups.
    QueryClusterDataEfficiencyCapacityState => QueryClusterDataEfficiencyCapacityStateResponse {
        cluster: ManagedObjectReference,
    } -> VsanDataEfficiencyCapacityState;

    QueryHostDrivesWithLimitedSupport => QueryHostDrivesWithLimitedSupportResponse {
        host: ManagedObjectReference,
    } -> Vec<DynamicData>;

    RetrieveAllFlashCapabilities => RetrieveAllFlashCapabilitiesResponse {
        cluster: ManagedObjectReference,
    } -> Vec<DynamicData>;

    /// Disks vSAN has claimed or can claim on a host.
    QueryVsanManagedDisks => QueryVsanManagedDisksResponse {
        host: ManagedObjectReference,
        vsan_disk_type?: String,
    } -> Vec<DynamicData>;
}
