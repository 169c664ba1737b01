//! Stubs of per-host storage configuration.

soap_methods! {
    managed_object: "HostStorageSystem";
    messages: host_config;

    rescan_all_hba => RescanAllHba;
    rescan_hba => RescanHba;
    rescan_vmfs => RescanVmfs;
    refresh_storage_system => RefreshStorageSystem;
    mark_as_ssd_task => MarkAsSsd_Task;
    mark_as_non_ssd_task => MarkAsNonSsd_Task;
    mark_as_local_task => MarkAsLocal_Task;
    mark_as_non_local_task => MarkAsNonLocal_Task;
    turn_disk_locator_led_on_task => TurnDiskLocatorLedOn_Task;
    turn_disk_locator_led_off_task => TurnDiskLocatorLedOff_Task;
    attach_scsi_lun => AttachScsiLun;
    detach_scsi_lun => DetachScsiLun;
    update_scsi_lun_display_name => UpdateScsiLunDisplayName;
    mount_vmfs_volume => MountVmfsVolume;
    unmount_vmfs_volume => UnmountVmfsVolume;
    query_unresolved_vmfs_volume => QueryUnresolvedVmfsVolume;
    retrieve_disk_partition_info => RetrieveDiskPartitionInfo;
    compute_disk_partition_info => ComputeDiskPartitionInfo;
    update_disk_partitions => UpdateDiskPartitions;
    query_path_selection_policy_options => QueryPathSelectionPolicyOptions;
    update_software_internet_scsi_enabled => UpdateSoftwareInternetScsiEnabled;
}
