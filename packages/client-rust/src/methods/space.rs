//! Stubs of the space report system.

soap_methods! {
    managed_object: "VsanSpaceReportSystem";
    messages: space;

    vsan_query_space_usage => VsanQuerySpaceUsage;
    query_vsan_managed_storage_space_usage => QueryVsanManagedStorageSpaceUsage;
    vsan_query_entity_space_usage => VsanQueryEntitySpaceUsage;
}
