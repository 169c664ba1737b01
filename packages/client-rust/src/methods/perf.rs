//! Stubs of the performance manager.

soap_methods! {
    managed_object: "VsanPerformanceManager";
    messages: perf;

    /// Fails with a `NotFound` fault when the performance service is disabled.
    vsan_perf_query_perf => VsanPerfQueryPerf;
    vsan_perf_get_supported_entity_types => VsanPerfGetSupportedEntityTypes;
    vsan_perf_get_aggregated_entity_types => VsanPerfGetAggregatedEntityTypes;
    vsan_perf_query_stats_object_information => VsanPerfQueryStatsObjectInformation;
    vsan_perf_create_stats_object => VsanPerfCreateStatsObject;
    vsan_perf_create_stats_object_task => VsanPerfCreateStatsObjectTask;
    vsan_perf_delete_stats_object => VsanPerfDeleteStatsObject;
    vsan_perf_delete_stats_object_task => VsanPerfDeleteStatsObjectTask;
    vsan_perf_set_stats_object_policy => VsanPerfSetStatsObjectPolicy;
    vsan_perf_query_node_information => VsanPerfQueryNodeInformation;
    vsan_perf_diagnose => VsanPerfDiagnose;
    vsan_perf_diagnose_task => VsanPerfDiagnoseTask;
    vsan_perf_get_supported_diagnostic_exceptions => VsanPerfGetSupportedDiagnosticExceptions;
    vsan_perf_query_time_ranges => VsanPerfQueryTimeRanges;
    vsan_perf_save_time_ranges => VsanPerfSaveTimeRanges;
    vsan_perf_delete_time_range => VsanPerfDeleteTimeRange;
    vsan_perf_query_cluster_health => VsanPerfQueryClusterHealth;
    vsan_perf_toggle_verbose_mode => VsanPerfToggleVerboseMode;
}
