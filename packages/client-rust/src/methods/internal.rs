//! Stubs of the host-side internal system.

soap_methods! {
    managed_object: "HostVsanInternalSystem";
    messages: internal;

    /// Target the `HostVsanInternalSystem` of one host; the answer covers the
    /// whole cluster as that host sees it.
    query_cmmds => QueryCmmds;
    query_physical_vsan_disks => QueryPhysicalVsanDisks;
    query_vsan_objects => QueryVsanObjects;
    query_objects_on_physical_vsan_disk => QueryObjectsOnPhysicalVsanDisk;
    query_vsan_statistics => QueryVsanStatistics;
    reconfiguration_satisfiable => ReconfigurationSatisfiable;
    reconfigure_dom_object => ReconfigureDomObject;
    delete_vsan_objects => DeleteVsanObjects;
    upgrade_vsan_objects => UpgradeVsanObjects;
    abdicate_dom_ownership => AbdicateDomOwnership;
    query_syncing_vsan_objects => QuerySyncingVsanObjects;
    run_vsan_physical_disk_diagnostics => RunVsanPhysicalDiskDiagnostics;
    can_provision_objects => CanProvisionObjects;
    get_vsan_obj_ext_attrs => GetVsanObjExtAttrs;
    query_vsan_object_uuids_by_filter => QueryVsanObjectUuidsByFilter;
}
