//! Stubs of datastores.

soap_methods! {
    managed_object: "Datastore";
    messages: datastore;

    refresh_datastore => RefreshDatastore;
    refresh_datastore_storage_info => RefreshDatastoreStorageInfo;
    destroy_datastore => DestroyDatastore;
    rename_datastore => RenameDatastore;
    datastore_enter_maintenance_mode => DatastoreEnterMaintenanceMode;
    datastore_exit_maintenance_mode_task => DatastoreExitMaintenanceMode_Task;
    update_virtual_machine_files_task => UpdateVirtualMachineFiles_Task;
    update_vvol_virtual_machine_files_task => UpdateVVolVirtualMachineFiles_Task;
}
