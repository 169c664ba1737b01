//! Stubs of the per-host vSAN system of the vSphere API.

soap_methods! {
    managed_object: "HostVsanSystem";
    messages: vim_vsan;

    query_disks_for_vsan => QueryDisksForVsan;
    add_disks_task => AddDisks_Task;
    initialize_disks_task => InitializeDisks_Task;
    remove_disk_task => RemoveDisk_Task;
    remove_disk_mapping_task => RemoveDiskMapping_Task;
    unmount_disk_mapping_task => UnmountDiskMapping_Task;
    update_vsan_task => UpdateVsan_Task;
    query_host_status => QueryHostStatus;
    evacuate_vsan_node_task => EvacuateVsanNode_Task;
    recommission_vsan_node_task => RecommissionVsanNode_Task;
}
