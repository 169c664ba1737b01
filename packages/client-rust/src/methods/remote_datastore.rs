//! Stubs of the remote datastore system.

soap_methods! {
    managed_object: "VsanRemoteDatastoreSystem";
    messages: platform;

    query_remote_server_clusters => QueryRemoteServerClusters;
    mount_precheck => MountPrecheck;
    vsan_remote_datastore_mount => VsanRemoteDatastoreMount;
    vsan_remote_datastore_unmount => VsanRemoteDatastoreUnmount;
}
