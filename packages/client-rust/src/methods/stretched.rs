//! Stubs of the stretched cluster system.

soap_methods! {
    managed_object: "VimClusterVsanVcStretchedClusterSystem";
    messages: stretched;

    vsan_vc_convert_to_stretched_cluster => VSANVcConvertToStretchedCluster;
    vsan_vc_add_witness_host => VSANVcAddWitnessHost;
    vsan_vc_remove_witness_host => VSANVcRemoveWitnessHost;
    vsan_vc_get_witness_hosts => VSANVcGetWitnessHosts;
    vsan_vc_get_preferred_fault_domain => VSANVcGetPreferredFaultDomain;
    vsan_vc_set_preferred_fault_domain => VSANVcSetPreferredFaultDomain;
    vsan_vc_is_witness_host => VSANVcIsWitnessHost;
    vsan_is_witness_virtual_appliance => VSANIsWitnessVirtualAppliance;
    vsan_vc_retrieve_stretched_cluster_vc_capability => VSANVcRetrieveStretchedClusterVcCapability;
    vsan_vc_get_witnessed_clusters => VSANVcGetWitnessedClusters;
}
