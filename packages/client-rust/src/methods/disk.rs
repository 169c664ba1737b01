//! Stubs of the disk management system.

soap_methods! {
    managed_object: "VimClusterVsanVcDiskManagementSystem";
    messages: disk;

    query_disk_mappings => QueryDiskMappings;
    initialize_disk_mappings => InitializeDiskMappings;
    add_disks_to_disk_group => AddDisksToDiskGroup;
    remove_disk_mapping => RemoveDiskMapping;
    remove_disks => RemoveDisks;
    unmount_disk_mapping => UnmountDiskMapping;
    rebuild_disk_mapping => RebuildDiskMapping;
    query_cluster_data_efficiency_capacity_state => QueryClusterDataEfficiencyCapacityState;
    query_host_drives_with_limited_support => QueryHostDrivesWithLimitedSupport;
    retrieve_all_flash_capabilities => RetrieveAllFlashCapabilities;
    query_vsan_managed_disks => QueryVsanManagedDisks;
}
