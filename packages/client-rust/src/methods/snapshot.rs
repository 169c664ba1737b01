//! Stubs of virtual machine snapshots.

soap_methods! {
    managed_object: "VirtualMachineSnapshot";
    messages: vm;

    remove_snapshot_task => RemoveSnapshot_Task;
    revert_to_snapshot_task => RevertToSnapshot_Task;
    rename_snapshot => RenameSnapshot;
    export_snapshot => ExportSnapshot;
}
