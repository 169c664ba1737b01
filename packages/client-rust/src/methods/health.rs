//! Stubs of the vCenter cluster health system.

soap_methods! {
    managed_object: "VsanVcClusterHealthSystem";
    messages: health;

    /// Runs every health test unless `fetch_from_cache` is set.
    vsan_query_vc_cluster_health_summary => VsanQueryVcClusterHealthSummary;
    vsan_query_vc_cluster_health_summary_task => VsanQueryVcClusterHealthSummaryTask;
    vsan_health_get_preflight_check_result => VsanHealthGetPreflightCheckResult;
    vsan_query_vc_cluster_create_vm_health_test => VsanQueryVcClusterCreateVmHealthTest;
    vsan_query_vc_cluster_create_vm_health_history_test => VsanQueryVcClusterCreateVmHealthHistoryTest;
    vsan_query_vc_cluster_network_perf_test => VsanQueryVcClusterNetworkPerfTest;
    vsan_query_vc_cluster_network_perf_history_test => VsanQueryVcClusterNetworkPerfHistoryTest;
    vsan_query_vc_cluster_smart_stats_summary => VsanQueryVcClusterSmartStatsSummary;
    vsan_query_vc_cluster_obj_ext_attrs => VsanQueryVcClusterObjExtAttrs;
    vsan_health_query_vsan_cluster_health_check_interval => VsanHealthQueryVsanClusterHealthCheckInterval;
    vsan_health_set_vsan_cluster_health_check_interval => VsanHealthSetVsanClusterHealthCheckInterval;
    vsan_health_get_vsan_cluster_silent_checks => VsanHealthGetVsanClusterSilentChecks;
    vsan_health_set_vsan_cluster_silent_checks => VsanHealthSetVsanClusterSilentChecks;
    vsan_health_query_vsan_cluster_health_config => VsanHealthQueryVsanClusterHealthConfig;
    vsan_health_set_vsan_cluster_telemetry_config => VsanHealthSetVsanClusterTelemetryConfig;
    vsan_health_test_vsan_cluster_telemetry_proxy => VsanHealthTestVsanClusterTelemetryProxy;
    vsan_health_send_vsan_telemetry => VsanHealthSendVsanTelemetry;
    vsan_health_repair_cluster_objects_immediate => VsanHealthRepairClusterObjectsImmediate;
    vsan_health_is_rebalance_running => VsanHealthIsRebalanceRunning;
    vsan_rebalance_cluster => VsanRebalanceCluster;
    vsan_stop_rebalance_cluster => VsanStopRebalanceCluster;
    vsan_vc_upload_hcl_db => VsanVcUploadHclDb;
    vsan_vc_update_hcl_db_from_web => VsanVcUpdateHclDbFromWeb;
    vsan_vc_upload_release_db => VsanVcUploadReleaseDb;
    vsan_vc_cluster_get_hcl_info => VsanVcClusterGetHclInfo;
    vsan_vc_cluster_query_verify_health_system_versions => VsanVcClusterQueryVerifyHealthSystemVersions;
    vsan_vc_cluster_run_vmdk_load_test => VsanVcClusterRunVmdkLoadTest;
    vsan_query_attach_to_sr_history => VsanQueryAttachToSrHistory;
    vsan_attach_vsan_support_bundle_to_sr => VsanAttachVsanSupportBundleToSr;
    vsan_download_hcl_file_task => VsanDownloadHclFile_Task;
    vsan_get_hcl_constraints => VsanGetHclConstraints;
    vsan_health_get_last_check_time => VsanHealthGetLastCheckTime;
    vsan_query_vc_cluster_vmdk_load_history_test => VsanQueryVcClusterVmdkLoadHistoryTest;
    vsan_query_vc_cluster_vmdk_workload_types => VsanQueryVcClusterVmdkWorkloadTypes;
    vsan_health_set_log_level => VsanHealthSetLogLevel;
    vsan_health_query_vsan_proxy_config => VsanHealthQueryVsanProxyConfig;
    vsan_query_all_supported_health_checks => VsanQueryAllSupportedHealthChecks;
}
