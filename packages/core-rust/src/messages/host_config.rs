//! Host configuration managers of the vSphere API: storage, networking,
//! services, firewall, datastores and advanced options.
//!
//! Each host has its own instance of these managers, reachable from
//! `HostSystem.configManager`.

use crate::mor::ManagedObjectReference;
use crate::types::{DynamicData, OptionValue};

crate::soap_messages! {
    RescanAllHba => RescanAllHbaResponse {};

    RescanHba => RescanHbaResponse {
        hba_device: String,
    };

    RescanVmfs => RescanVmfsResponse {};

    RefreshStorageSystem => RefreshStorageSystemResponse {};

    /// Flags a disk as flash so vSAN can claim it for the cache tier.
    MarkAsSsd_Task => MarkAsSsd_TaskResponse {
        scsi_disk_uuid: String,
    } -> ManagedObjectReference;

    MarkAsNonSsd_Task => MarkAsNonSsd_TaskResponse {
        scsi_disk_uuid: String,
    } -> ManagedObjectReference;

    MarkAsLocal_Task => MarkAsLocal_TaskResponse {
        scsi_disk_uuid: String,
    } -> ManagedObjectReference;

    MarkAsNonLocal_Task => MarkAsNonLocal_TaskResponse {
        scsi_disk_uuid: String,
    } -> ManagedObjectReference;

    TurnDiskLocatorLedOn_Task => TurnDiskLocatorLedOn_TaskResponse {
        scsi_disk_uuids: Vec<String>,
    } -> ManagedObjectReference;

    TurnDiskLocatorLedOff_Task => TurnDiskLocatorLedOff_TaskResponse {
        scsi_disk_uuids: Vec<String>,
    } -> ManagedObjectReference;

    AttachScsiLun => AttachScsiLunResponse {
        lun_uuid: String,
    };

    DetachScsiLun => DetachScsiLunResponse {
        lun_uuid: String,
    };

    UpdateScsiLunDisplayName => UpdateScsiLunDisplayNameResponse {
        lun_uuid: String,
        display_name: String,
    };

    MountVmfsVolume => MountVmfsVolumeResponse {
        vmfs_uuid: String,
    };

    UnmountVmfsVolume => UnmountVmfsVolumeResponse {
        vmfs_uuid: String,
    };

    QueryUnresolvedVmfsVolume => QueryUnresolvedVmfsVolumeResponse {} -> Vec<DynamicData>;

    RetrieveDiskPartitionInfo => RetrieveDiskPartitionInfoResponse {
        device_path: Vec<String>,
    } -> Vec<DynamicData>;

    ComputeDiskPartitionInfo => ComputeDiskPartitionInfoResponse {
        device_path: String,
        layout: DynamicData,
        partition_format?: String,
    } -> DynamicData;

    UpdateDiskPartitions => UpdateDiskPartitionsResponse {
        device_path: String,
        spec: DynamicData,
    };

    QueryPathSelectionPolicyOptions => QueryPathSelectionPolicyOptionsResponse {}
        -> Vec<DynamicData>;

    UpdateSoftwareInternetScsiEnabled => UpdateSoftwareInternetScsiEnabledResponse {
        enabled: bool,
    };

    AddVirtualNic => AddVirtualNicResponse {
        portgroup: String,
        nic: DynamicData,
    } -> String;

    RemoveVirtualNic => RemoveVirtualNicResponse {
        device: String,
    };

    UpdateVirtualNic => UpdateVirtualNicResponse {
        device: String,
        nic: DynamicData,
    };

    AddVirtualSwitch => AddVirtualSwitchResponse {
        vswitch_name: String,
        spec?: DynamicData,
    };

    RemoveVirtualSwitch => RemoveVirtualSwitchResponse {
        vswitch_name: String,
    };

    UpdateVirtualSwitch => UpdateVirtualSwitchResponse {
        vswitch_name: String,
        spec: DynamicData,
    };

    AddPortGroup => AddPortGroupResponse {
        portgrp: DynamicData,
    };

    RemovePortGroup => RemovePortGroupResponse {
        pg_name: String,
    };

    UpdatePortGroup => UpdatePortGroupResponse {
        pg_name: String,
        portgrp: DynamicData,
    };

    QueryNetworkHint => QueryNetworkHintResponse {
        device?: Vec<String>,
    } -> Vec<DynamicData>;

    RefreshNetworkSystem => RefreshNetworkSystemResponse {};

    UpdateNetworkConfig => UpdateNetworkConfigResponse {
        config: DynamicData,
        change_mode: String,
    } -> DynamicData;

    UpdateDnsConfig => UpdateDnsConfigResponse {
        config: DynamicData,
    };

    UpdateIpRouteConfig => UpdateIpRouteConfigResponse {
        config: DynamicData,
    };

    /// Tags a VMkernel adapter for a traffic type such as `vsan` or `vmotion`.
    SelectVnicForNicType => SelectVnicForNicTypeResponse {
        nic_type: String,
        device: String,
    };

    DeselectVnicForNicType => DeselectVnicForNicTypeResponse {
        nic_type: String,
        device: String,
    };

    QueryNetConfig => QueryNetConfigResponse {
        nic_type: String,
    } -> Option<DynamicData>;

    StartService => StartServiceResponse {
        id: String,
    };

    StopService => StopServiceResponse {
        id: String,
    };

    RestartService => RestartServiceResponse {
        id: String,
    };

    RefreshServices => RefreshServicesResponse {};

    UpdateServicePolicy => UpdateServicePolicyResponse {
        id: String,
        policy: String,
    };

    UninstallService => UninstallServiceResponse {
        id: String,
    };

    EnableRuleset => EnableRulesetResponse {
        id: String,
    };

    DisableRuleset => DisableRulesetResponse {
        id: String,
    };

    UpdateRuleset => UpdateRulesetResponse {
        id: String,
        spec: DynamicData,
    };

    RefreshFirewall => RefreshFirewallResponse {};

    UpdateDefaultPolicy => UpdateDefaultPolicyResponse {
        default_policy: DynamicData,
    };

    CreateVmfsDatastore => CreateVmfsDatastoreResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    CreateNasDatastore => CreateNasDatastoreResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    CreateLocalDatastore => CreateLocalDatastoreResponse {
        name: String,
        path: String,
    } -> ManagedObjectReference;

    CreateVvolDatastore => CreateVvolDatastoreResponse {
        spec: DynamicData,
    } -> ManagedObjectReference;

    RemoveDatastore => RemoveDatastoreResponse {
        datastore: ManagedObjectReference,
    };

    RemoveDatastoreEx_Task => RemoveDatastoreEx_TaskResponse {
        datastore: Vec<ManagedObjectReference>,
    } -> ManagedObjectReference;

    ExpandVmfsDatastore => ExpandVmfsDatastoreResponse {
        datastore: ManagedObjectReference,
        spec: DynamicData,
    } -> ManagedObjectReference;

    ExtendVmfsDatastore => ExtendVmfsDatastoreResponse {
        datastore: ManagedObjectReference,
        spec: DynamicData,
    } -> ManagedObjectReference;

    QueryAvailableDisksForVmfs => QueryAvailableDisksForVmfsResponse {
        datastore?: ManagedObjectReference,
    } -> Vec<DynamicData>;

    QueryVmfsDatastoreCreateOptions => QueryVmfsDatastoreCreateOptionsResponse {
        device_path: String,
        vmfs_major_version?: i32,
    } -> Vec<DynamicData>;

    QueryUnresolvedVmfsVolumes => QueryUnresolvedVmfsVolumesResponse {} -> Vec<DynamicData>;

    ResignatureUnresolvedVmfsVolume_Task => ResignatureUnresolvedVmfsVolume_TaskResponse {
        resolution_spec: DynamicData,
    } -> ManagedObjectReference;

    UpdateLocalSwapDatastore => UpdateLocalSwapDatastoreResponse {
        datastore?: ManagedObjectReference,
    };

    ConfigureDatastorePrincipal => ConfigureDatastorePrincipalResponse {
        user_name: String,
        password?: String,
    };

    /// Options under `name`; a trailing `.` selects a whole subtree.
    QueryOptions => QueryOptionsResponse {
        name?: String,
    } -> Vec<OptionValue>;

    UpdateOptions => UpdateOptionsResponse {
        changed_value: Vec<OptionValue>,
    };
}
