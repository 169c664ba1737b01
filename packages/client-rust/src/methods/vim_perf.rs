//! Stubs of the vSphere performance manager.

soap_methods! {
    managed_object: "PerformanceManager";
    messages: vim_perf;

    query_perf => QueryPerf;
    query_perf_composite => QueryPerfComposite;
    query_available_perf_metric => QueryAvailablePerfMetric;
    query_perf_counter => QueryPerfCounter;
    query_perf_counter_by_level => QueryPerfCounterByLevel;
    query_perf_provider_summary => QueryPerfProviderSummary;
    create_perf_interval => CreatePerfInterval;
    remove_perf_interval => RemovePerfInterval;
    update_perf_interval => UpdatePerfInterval;
    reset_counter_level_mapping => ResetCounterLevelMapping;
    update_counter_level_mapping => UpdateCounterLevelMapping;
}
