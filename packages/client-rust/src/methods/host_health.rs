//! Stubs of the host-side health system.

soap_methods! {
    managed_object: "HostVsanHealthSystem";
    messages: host_health;

    vsan_host_query_host_info_by_uuids => VsanHostQueryHostInfoByUuids;
    vsan_host_create_vm_health_test => VsanHostCreateVmHealthTest;
    vsan_host_query_smart_stats => VsanHostQuerySmartStats;
    vsan_host_query_physical_disk_health_summary => VsanHostQueryPhysicalDiskHealthSummary;
    vsan_host_query_object_health_summary => VsanHostQueryObjectHealthSummary;
    vsan_host_query_encryption_health_summary => VsanHostQueryEncryptionHealthSummary;
    vsan_host_query_health_system_version => VsanHostQueryHealthSystemVersion;
    vsan_host_query_check_limits => VsanHostQueryCheckLimits;
    vsan_host_query_file_scan_summary => VsanHostQueryFileScanSummary;
    vsan_host_query_adv_cfg => VsanHostQueryAdvCfg;
    vsan_host_query_verify_network_settings => VsanHostQueryVerifyNetworkSettings;
    vsan_host_query_run_iperf_client => VsanHostQueryRunIperfClient;
    vsan_host_query_run_iperf_server => VsanHostQueryRunIperfServer;
    vsan_host_repair_immediate_objects => VsanHostRepairImmediateObjects;
    vsan_host_clomd_liveness => VsanHostClomdLiveness;
    vsan_wait_for_vsan_health_generation_id_change => VsanWaitForVsanHealthGenerationIdChange;
    vsan_get_hcl_info => VsanGetHclInfo;
    vsan_start_proactive_rebalance => VsanStartProactiveRebalance;
    vsan_stop_proactive_rebalance => VsanStopProactiveRebalance;
    vsan_host_get_proactive_rebalance_info => VsanHostGetProactiveRebalanceInfo;
    vsan_host_prepare_vmdk_load_test => VsanHostPrepareVmdkLoadTest;
    vsan_host_run_vmdk_load_test => VsanHostRunVmdkLoadTest;
    vsan_host_cleanup_vmdk_load_test => VsanHostCleanupVmdkLoadTest;
}
