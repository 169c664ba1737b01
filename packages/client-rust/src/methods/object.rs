//! Stubs of the object system.

soap_methods! {
    managed_object: "VsanObjectSystem";
    messages: object;

    vsan_query_object_identities => VsanQueryObjectIdentities;
    vos_query_vsan_object_information => VosQueryVsanObjectInformation;
    vos_set_vsan_object_policy => VosSetVsanObjectPolicy;
    vsan_query_object_policy_satisfiability => VsanQueryObjectPolicySatisfiability;
    vsan_query_new_policy_satisfiability => VsanQueryNewPolicySatisfiability;
    vsan_query_inaccessible_vm_swap_objects => VsanQueryInaccessibleVmSwapObjects;
    vsan_delete_objects_task => VsanDeleteObjects_Task;
    vsan_query_syncing_vsan_objects_summary => VsanQuerySyncingVsanObjectsSummary;
    vsan_query_syncing_vsan_objects => VsanQuerySyncingVsanObjects;
    relayout_objects => RelayoutObjects;
    vsan_purge_inaccessible_vm_swap_objects => VsanPurgeInaccessibleVmSwapObjects;
}
