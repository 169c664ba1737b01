//! Stubs of virtual machines.

soap_methods! {
    managed_object: "VirtualMachine";
    messages: vm;

    power_on_vm_task => PowerOnVM_Task;
    power_off_vm_task => PowerOffVM_Task;
    reset_vm_task => ResetVM_Task;
    suspend_vm_task => SuspendVM_Task;
    shutdown_guest => ShutdownGuest;
    reboot_guest => RebootGuest;
    standby_guest => StandbyGuest;
    reconfig_vm_task => ReconfigVM_Task;
    clone_vm_task => CloneVM_Task;
    relocate_vm_task => RelocateVM_Task;
    migrate_vm_task => MigrateVM_Task;
    customize_vm_task => CustomizeVM_Task;
    create_snapshot_task => CreateSnapshot_Task;
    revert_to_current_snapshot_task => RevertToCurrentSnapshot_Task;
    remove_all_snapshots_task => RemoveAllSnapshots_Task;
    consolidate_vm_disks_task => ConsolidateVMDisks_Task;
    reload_virtual_machine_from_path_task => ReloadVirtualMachineFromPath_Task;
    upgrade_vm_task => UpgradeVM_Task;
    mark_as_template => MarkAsTemplate;
    mark_as_virtual_machine => MarkAsVirtualMachine;
    unregister_vm => UnregisterVM;
    terminate_vm => TerminateVM;
    acquire_ticket => AcquireTicket;
    acquire_mks_ticket => AcquireMksTicket;
    refresh_storage_info => RefreshStorageInfo;
    mount_tools_installer => MountToolsInstaller;
    unmount_tools_installer => UnmountToolsInstaller;
    reset_guest_information => ResetGuestInformation;
    set_screen_resolution => SetScreenResolution;
    extract_ovf_environment => ExtractOvfEnvironment;
    defragment_all_disks => DefragmentAllDisks;
    send_nmi => SendNMI;
    answer_vm => AnswerVM;
    query_changed_disk_areas => QueryChangedDiskAreas;
    query_fault_tolerance_compatibility => QueryFaultToleranceCompatibility;
}
