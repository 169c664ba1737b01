//! Stubs of per-host datastore management.

soap_methods! {
    managed_object: "HostDatastoreSystem";
    messages: host_config;

    create_vmfs_datastore => CreateVmfsDatastore;
    create_nas_datastore => CreateNasDatastore;
    create_local_datastore => CreateLocalDatastore;
    create_vvol_datastore => CreateVvolDatastore;
    remove_datastore => RemoveDatastore;
    remove_datastore_ex_task => RemoveDatastoreEx_Task;
    expand_vmfs_datastore => ExpandVmfsDatastore;
    extend_vmfs_datastore => ExtendVmfsDatastore;
    query_available_disks_for_vmfs => QueryAvailableDisksForVmfs;
    query_vmfs_datastore_create_options => QueryVmfsDatastoreCreateOptions;
    query_unresolved_vmfs_volumes => QueryUnresolvedVmfsVolumes;
    resignature_unresolved_vmfs_volume_task => ResignatureUnresolvedVmfsVolume_Task;
    update_local_swap_datastore => UpdateLocalSwapDatastore;
    configure_datastore_principal => ConfigureDatastorePrincipal;
}
