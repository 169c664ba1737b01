//! Stubs of inventory folders.

soap_methods! {
    managed_object: "Folder";
    messages: inventory;

    create_folder => CreateFolder;
    create_cluster_ex => CreateClusterEx;
    create_datacenter => CreateDatacenter;
    create_storage_pod => CreateStoragePod;
    add_standalone_host_task => AddStandaloneHost_Task;
    move_into_folder_task => MoveIntoFolder_Task;
    unregister_and_destroy_task => UnregisterAndDestroy_Task;
    create_vm_task => CreateVM_Task;
    register_vm_task => RegisterVM_Task;
    create_dvs_task => CreateDVS_Task;
}
